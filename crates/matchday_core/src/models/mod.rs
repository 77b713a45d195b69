//! Core data model: players, clubs and matchday lineups.

pub mod club;
pub mod lineup;
pub mod player;

pub use club::{ClubColors, ClubId, ClubInfo};
pub use lineup::{Lineup, SubstitutionRecord, BENCH_CAPACITY, STARTING_SLOTS};
pub use player::{Health, InjurySeverity, Player, PlayerAttributes, PlayerId, Position};
