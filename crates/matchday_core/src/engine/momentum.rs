//! Momentum strategies.
//!
//! Two historical formulas survive for the "natural target" a side's
//! momentum drifts towards: a linear reputation/power difference and a
//! power-ratio "quality gravity" model. They disagree materially, so both
//! are exposed as named strategies instead of being merged;
//! [`MomentumModel::QualityGravity`] is the default.

use serde::{Deserialize, Serialize};

use crate::models::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MomentumModel {
    /// Linear in the strength difference, saturating at ±40 points.
    LinearDifference,
    /// Logistic in the strength ratio; small quality edges matter more
    /// than the linear model suggests, huge ones less.
    #[default]
    QualityGravity,
}

impl MomentumModel {
    /// The equilibrium momentum for a side of strength `own` facing a side
    /// of strength `opp`, in -1.0..=1.0.
    pub fn natural_target(&self, own: f32, opp: f32) -> f32 {
        match self {
            MomentumModel::LinearDifference => ((own - opp) / 40.0).clamp(-1.0, 1.0),
            MomentumModel::QualityGravity => {
                let ratio = own / opp.max(1.0);
                let x = (ratio - 1.0) * 6.0;
                (2.0 / (1.0 + (-x).exp()) - 1.0).clamp(-1.0, 1.0)
            }
        }
    }

    /// Move `current` a fraction `rate` of the way towards the natural
    /// target.
    pub fn drift(&self, current: f32, own: f32, opp: f32, rate: f32) -> f32 {
        let target = self.natural_target(own, opp);
        (current + (target - current) * rate.clamp(0.0, 1.0)).clamp(-1.0, 1.0)
    }
}

/// Blended team strength: mostly the squad's average rating, anchored by
/// club reputation (0-10000, scaled down to the rating range).
pub fn team_strength(players: &[Player], reputation: u16) -> f32 {
    let reputation_score = reputation as f32 / 100.0;
    if players.is_empty() {
        return reputation_score;
    }
    let avg = players.iter().map(|p| p.overall as f32).sum::<f32>() / players.len() as f32;
    0.7 * avg + 0.3 * reputation_score
}
