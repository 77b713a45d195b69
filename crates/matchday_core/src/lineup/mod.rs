//! Lineup construction, repair and mutation.

pub mod builder;
pub mod fit;
pub mod mutator;
pub mod repair;

pub use builder::auto_pick_lineup;
pub use fit::{best_fit, calculate_fit_score, GK_MISMATCH_PENALTY};
pub use mutator::{
    assign_to_slot, evict_suspended_players, swap_players, validate_lineup, SlotRef,
};
pub use repair::{repair_lineup, BENCH_ROLE_TEMPLATE, FRESH_CONDITION_THRESHOLD};
