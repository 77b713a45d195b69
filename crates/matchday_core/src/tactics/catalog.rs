//! Static formation catalog.
//!
//! A closed, versioned data set: 16 formations, each an ordered list of 11
//! role-tagged slots with pitch coordinates (x across the pitch, y towards
//! the opponent goal, both 0-100) and attack/defense/press style biases.
//! Slot 0 is always the goalkeeper.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Formation every club starts on until the AI or the user picks another.
pub const DEFAULT_TACTIC_ID: &str = "4-4-2";

/// Broad style classification of a formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TacticStyle {
    VeryAttacking,
    Attacking,
    Balanced,
    Defensive,
    VeryDefensive,
}

impl TacticStyle {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VeryAttacking => "Very Attacking",
            Self::Attacking => "Attacking",
            Self::Balanced => "Balanced",
            Self::Defensive => "Defensive",
            Self::VeryDefensive => "Very Defensive",
        }
    }
}

/// One of 11 fixed positions in a formation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TacticSlot {
    pub index: usize,
    pub role: Position,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tactic {
    pub id: String,
    pub name: String,
    pub style: TacticStyle,
    pub attack: f32,
    pub defense: f32,
    pub press: f32,
    pub slots: Vec<TacticSlot>,
}

fn tactic(
    id: &str,
    name: &str,
    style: TacticStyle,
    attack: f32,
    defense: f32,
    press: f32,
    layout: [(Position, f32, f32); 11],
) -> Tactic {
    Tactic {
        id: id.to_string(),
        name: name.to_string(),
        style,
        attack,
        defense,
        press,
        slots: layout
            .iter()
            .enumerate()
            .map(|(index, &(role, x, y))| TacticSlot { index, role, x, y })
            .collect(),
    }
}

use Position::{DEF, FWD, GK, MID};

static CATALOG: Lazy<Vec<Tactic>> = Lazy::new(|| {
    vec![
        tactic(
            "4-4-2",
            "4-4-2",
            TacticStyle::Balanced,
            0.5,
            0.5,
            0.5,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 15.0, 55.0),
                (MID, 38.0, 50.0),
                (MID, 62.0, 50.0),
                (MID, 85.0, 55.0),
                (FWD, 38.0, 82.0),
                (FWD, 62.0, 82.0),
            ],
        ),
        tactic(
            "4-3-3",
            "4-3-3",
            TacticStyle::Attacking,
            0.7,
            0.4,
            0.6,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 30.0, 50.0),
                (MID, 50.0, 45.0),
                (MID, 70.0, 50.0),
                (FWD, 20.0, 80.0),
                (FWD, 50.0, 85.0),
                (FWD, 80.0, 80.0),
            ],
        ),
        tactic(
            "4-5-1",
            "4-5-1",
            TacticStyle::Defensive,
            0.35,
            0.65,
            0.45,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 12.0, 55.0),
                (MID, 32.0, 48.0),
                (MID, 50.0, 45.0),
                (MID, 68.0, 48.0),
                (MID, 88.0, 55.0),
                (FWD, 50.0, 85.0),
            ],
        ),
        tactic(
            "4-2-3-1",
            "4-2-3-1",
            TacticStyle::Attacking,
            0.6,
            0.5,
            0.6,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 38.0, 40.0),
                (MID, 62.0, 40.0),
                (MID, 20.0, 62.0),
                (MID, 50.0, 65.0),
                (MID, 80.0, 62.0),
                (FWD, 50.0, 85.0),
            ],
        ),
        tactic(
            "3-5-2",
            "3-5-2",
            TacticStyle::Balanced,
            0.55,
            0.45,
            0.55,
            [
                (GK, 50.0, 5.0),
                (DEF, 28.0, 22.0),
                (DEF, 50.0, 20.0),
                (DEF, 72.0, 22.0),
                (MID, 10.0, 50.0),
                (MID, 32.0, 48.0),
                (MID, 50.0, 45.0),
                (MID, 68.0, 48.0),
                (MID, 90.0, 50.0),
                (FWD, 38.0, 82.0),
                (FWD, 62.0, 82.0),
            ],
        ),
        tactic(
            "4-4-2-diamond",
            "4-4-2 Diamond",
            TacticStyle::Balanced,
            0.55,
            0.5,
            0.5,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 50.0, 38.0),
                (MID, 30.0, 52.0),
                (MID, 70.0, 52.0),
                (MID, 50.0, 66.0),
                (FWD, 38.0, 82.0),
                (FWD, 62.0, 82.0),
            ],
        ),
        tactic(
            "4-1-4-1",
            "4-1-4-1",
            TacticStyle::Defensive,
            0.4,
            0.6,
            0.5,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 50.0, 38.0),
                (MID, 15.0, 58.0),
                (MID, 38.0, 55.0),
                (MID, 62.0, 55.0),
                (MID, 85.0, 58.0),
                (FWD, 50.0, 85.0),
            ],
        ),
        tactic(
            "4-4-1-1",
            "4-4-1-1",
            TacticStyle::Defensive,
            0.45,
            0.55,
            0.45,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 15.0, 52.0),
                (MID, 38.0, 48.0),
                (MID, 62.0, 48.0),
                (MID, 85.0, 52.0),
                (FWD, 50.0, 68.0),
                (FWD, 50.0, 85.0),
            ],
        ),
        tactic(
            "3-4-3",
            "3-4-3",
            TacticStyle::VeryAttacking,
            0.8,
            0.3,
            0.7,
            [
                (GK, 50.0, 5.0),
                (DEF, 28.0, 22.0),
                (DEF, 50.0, 20.0),
                (DEF, 72.0, 22.0),
                (MID, 12.0, 50.0),
                (MID, 38.0, 48.0),
                (MID, 62.0, 48.0),
                (MID, 88.0, 50.0),
                (FWD, 22.0, 80.0),
                (FWD, 50.0, 85.0),
                (FWD, 78.0, 80.0),
            ],
        ),
        tactic(
            "4-3-1-2",
            "4-3-1-2",
            TacticStyle::Balanced,
            0.55,
            0.5,
            0.5,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 30.0, 48.0),
                (MID, 50.0, 44.0),
                (MID, 70.0, 48.0),
                (MID, 50.0, 64.0),
                (FWD, 38.0, 82.0),
                (FWD, 62.0, 82.0),
            ],
        ),
        tactic(
            "4-2-2-2",
            "4-2-2-2",
            TacticStyle::Attacking,
            0.65,
            0.45,
            0.55,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 38.0, 40.0),
                (MID, 62.0, 40.0),
                (MID, 25.0, 60.0),
                (MID, 75.0, 60.0),
                (FWD, 38.0, 82.0),
                (FWD, 62.0, 82.0),
            ],
        ),
        tactic(
            "5-3-2",
            "5-3-2",
            TacticStyle::Defensive,
            0.35,
            0.7,
            0.4,
            [
                (GK, 50.0, 5.0),
                (DEF, 8.0, 30.0),
                (DEF, 30.0, 22.0),
                (DEF, 50.0, 20.0),
                (DEF, 70.0, 22.0),
                (DEF, 92.0, 30.0),
                (MID, 30.0, 50.0),
                (MID, 50.0, 46.0),
                (MID, 70.0, 50.0),
                (FWD, 38.0, 80.0),
                (FWD, 62.0, 80.0),
            ],
        ),
        tactic(
            "5-4-1",
            "5-4-1",
            TacticStyle::VeryDefensive,
            0.25,
            0.8,
            0.35,
            [
                (GK, 50.0, 5.0),
                (DEF, 8.0, 30.0),
                (DEF, 30.0, 22.0),
                (DEF, 50.0, 20.0),
                (DEF, 70.0, 22.0),
                (DEF, 92.0, 30.0),
                (MID, 15.0, 52.0),
                (MID, 38.0, 48.0),
                (MID, 62.0, 48.0),
                (MID, 85.0, 52.0),
                (FWD, 50.0, 82.0),
            ],
        ),
        tactic(
            "3-4-2-1",
            "3-4-2-1",
            TacticStyle::Attacking,
            0.65,
            0.4,
            0.6,
            [
                (GK, 50.0, 5.0),
                (DEF, 28.0, 22.0),
                (DEF, 50.0, 20.0),
                (DEF, 72.0, 22.0),
                (MID, 12.0, 50.0),
                (MID, 38.0, 48.0),
                (MID, 62.0, 48.0),
                (MID, 88.0, 50.0),
                (FWD, 35.0, 72.0),
                (FWD, 65.0, 72.0),
                (FWD, 50.0, 86.0),
            ],
        ),
        tactic(
            "4-3-2-1",
            "4-3-2-1",
            TacticStyle::Balanced,
            0.55,
            0.5,
            0.55,
            [
                (GK, 50.0, 5.0),
                (DEF, 15.0, 25.0),
                (DEF, 38.0, 22.0),
                (DEF, 62.0, 22.0),
                (DEF, 85.0, 25.0),
                (MID, 30.0, 48.0),
                (MID, 50.0, 44.0),
                (MID, 70.0, 48.0),
                (FWD, 35.0, 72.0),
                (FWD, 65.0, 72.0),
                (FWD, 50.0, 86.0),
            ],
        ),
        tactic(
            "3-4-1-2",
            "3-4-1-2",
            TacticStyle::Balanced,
            0.55,
            0.45,
            0.55,
            [
                (GK, 50.0, 5.0),
                (DEF, 28.0, 22.0),
                (DEF, 50.0, 20.0),
                (DEF, 72.0, 22.0),
                (MID, 12.0, 50.0),
                (MID, 38.0, 46.0),
                (MID, 62.0, 46.0),
                (MID, 88.0, 50.0),
                (MID, 50.0, 64.0),
                (FWD, 38.0, 82.0),
                (FWD, 62.0, 82.0),
            ],
        ),
    ]
});

/// All catalog formations, default first.
pub fn all() -> &'static [Tactic] {
    &CATALOG
}

/// Total lookup: an unknown id resolves to the default formation so callers
/// never have to null-check a tactic reference.
pub fn get_by_id(id: &str) -> &'static Tactic {
    CATALOG.iter().find(|t| t.id == id).unwrap_or_else(default_tactic)
}

pub fn default_tactic() -> &'static Tactic {
    &CATALOG[0]
}
