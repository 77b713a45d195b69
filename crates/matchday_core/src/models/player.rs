use serde::{Deserialize, Serialize};

pub type PlayerId = u32;

/// A player's single natural role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        }
    }

    pub fn all() -> [Position; 4] {
        [Position::GK, Position::DEF, Position::MID, Position::FWD]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjurySeverity {
    Minor,
    Severe,
}

/// Health status, mutated by the external calendar/match simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Health {
    #[default]
    Healthy,
    Injured {
        severity: InjurySeverity,
        days_remaining: u16,
    },
}

/// Sub-skill scalars, 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub passing: u8,
    pub defending: u8,
    pub finishing: u8,
    pub technique: u8,
    pub pace: u8,
    pub strength: u8,
    pub positioning: u8,
    pub goalkeeping: u8,
    pub vision: u8,
    pub attacking: u8,
}

/// Squad member as delivered by the external roster provider.
///
/// Read-only to this crate: condition, health and suspensions are mutated by
/// the calendar/match simulation between ticks. The AI core only decides
/// where a player is placed in a lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Overall rating, 0-100.
    pub overall: u8,
    pub attributes: PlayerAttributes,
    /// Freshness, 0-100. Decays with fatigue.
    pub condition: u8,
    pub health: Health,
    /// Remaining match bans.
    pub suspension_matches: u8,
}

impl Player {
    /// Selection eligibility: not banned and not severely injured.
    /// A minor knock does not rule a player out.
    pub fn is_available(&self) -> bool {
        self.suspension_matches == 0 && !self.is_severely_injured()
    }

    pub fn is_severely_injured(&self) -> bool {
        matches!(
            self.health,
            Health::Injured { severity: InjurySeverity::Severe, .. }
        )
    }
}
