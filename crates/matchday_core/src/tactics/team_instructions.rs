//! In-match team instructions: tempo, mindset and pressing intensity.
//!
//! These are the knobs the decision engine turns alongside formation
//! switches. The numeric accessors feed the external match engine's
//! stamina and risk models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TeamTempo {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl TeamTempo {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
        }
    }

    /// Multiplier on per-minute stamina drain.
    pub fn stamina_drain_modifier(&self) -> f32 {
        match self {
            Self::Slow => 0.85,
            Self::Normal => 1.0,
            Self::Fast => 1.25,
        }
    }

    pub fn to_numeric(&self) -> i8 {
        match self {
            Self::Slow => -1,
            Self::Normal => 0,
            Self::Fast => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TeamMindset {
    Defensive,
    #[default]
    Balanced,
    Attacking,
}

impl TeamMindset {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Defensive => "Defensive",
            Self::Balanced => "Balanced",
            Self::Attacking => "Attacking",
        }
    }

    /// Multiplier on risky forward actions (through balls, long shots).
    pub fn risk_modifier(&self) -> f32 {
        match self {
            Self::Defensive => 0.7,
            Self::Balanced => 1.0,
            Self::Attacking => 1.3,
        }
    }

    pub fn to_numeric(&self) -> i8 {
        match self {
            Self::Defensive => -1,
            Self::Balanced => 0,
            Self::Attacking => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressingIntensity {
    Low,
    #[default]
    Medium,
    High,
}

impl PressingIntensity {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Multiplier on pressing stamina cost.
    pub fn stamina_cost_modifier(&self) -> f32 {
        match self {
            Self::Low => 0.7,
            Self::Medium => 1.0,
            Self::High => 1.5,
        }
    }

    pub fn to_numeric(&self) -> i8 {
        match self {
            Self::Low => -1,
            Self::Medium => 0,
            Self::High => 1,
        }
    }
}
