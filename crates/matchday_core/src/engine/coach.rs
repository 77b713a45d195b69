//! Coach competence model.
//!
//! A probabilistic layer over the decision engine: better coaches intervene
//! more reliably, weaker ones sometimes sit on their hands. All draws go
//! through the injected rng so the behaviour is reproducible under a fixed
//! seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Random jitter added to the action probability each tick, modelling
/// day-to-day inconsistency.
pub const COMPETENCE_JITTER: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachProfile {
    /// Decision-making ability, 0-20.
    pub decision_making: u8,
    /// Touchline experience, 0-20.
    pub experience: u8,
}

impl CoachProfile {
    pub fn new(decision_making: u8, experience: u8) -> Self {
        Self { decision_making: decision_making.min(20), experience: experience.min(20) }
    }

    /// Middle-of-the-road default used when a club has no coach assigned.
    pub fn default_coach() -> Self {
        Self::new(10, 10)
    }

    /// Chance the coach acts on a non-priority tick. Ranges from 0.45 for
    /// a hopeless novice up to a 0.95 cap for an elite veteran.
    pub fn action_probability(&self) -> f32 {
        (0.45 + 0.02 * self.decision_making as f32 + 0.01 * self.experience as f32).min(0.95)
    }

    /// Roll whether the coach intervenes this tick.
    pub fn decides_to_act<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        let jitter = rng.gen_range(-COMPETENCE_JITTER..=COMPETENCE_JITTER);
        let threshold = (self.action_probability() + jitter).clamp(0.0, 1.0);
        rng.gen::<f32>() < threshold
    }
}

impl Default for CoachProfile {
    fn default() -> Self {
        Self::default_coach()
    }
}
