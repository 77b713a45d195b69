//! # matchday_core - AI Squad Management for Football Simulation
//!
//! This library provides the AI side of matchday management: formation
//! selection, automatic lineup construction and repair, and in-match
//! coaching decisions (substitutions, formation switches, team
//! instructions) for every club the user does not control.
//!
//! ## Features
//! - Deterministic lineup construction and repair (same squad = same XI)
//! - Tiered repair cascade that prefers fresh, natural-position starters
//! - Brute-force formation analysis over the whole tactic catalog
//! - Stateless per-tick decision engine returning inspectable deltas
//! - Reproducible coach randomness via injectable rng

// Game AI entry points often require many parameters for match state
#![allow(clippy::too_many_arguments)]

pub mod engine;
pub mod error;
pub mod lineup;
pub mod models;
pub mod tactics;

// Re-export the main AI entry points
pub use engine::{
    best_formation_for, prepare_all_teams, AiDecisionEngine, AiSensors, CoachProfile,
    CompetitionKind, DecisionDelta, DecisionProfile, MatchContext, MatchLiveState, SideState,
    TeamSide, MAX_SUBSTITUTIONS,
};
pub use error::{LineupError, Result};

// Re-export the lineup toolkit
pub use lineup::{
    assign_to_slot, auto_pick_lineup, calculate_fit_score, evict_suspended_players, repair_lineup,
    swap_players, validate_lineup, SlotRef,
};

// Re-export core data types
pub use models::{
    ClubColors, ClubInfo, Health, InjurySeverity, Lineup, Player, PlayerAttributes, PlayerId,
    Position, SubstitutionRecord, BENCH_CAPACITY, STARTING_SLOTS,
};

// Re-export the tactical system
pub use tactics::{
    PressingIntensity, Tactic, TacticSlot, TacticStyle, TeamMindset, TeamTempo, DEFAULT_TACTIC_ID,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
