//! Tactical system: formation catalog and team instructions.

pub mod catalog;
pub mod team_instructions;

pub use catalog::{Tactic, TacticSlot, TacticStyle, DEFAULT_TACTIC_ID};
pub use team_instructions::{PressingIntensity, TeamMindset, TeamTempo};
