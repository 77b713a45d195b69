use thiserror::Error;

use crate::models::PlayerId;

/// Pre-flight legality failures reported by `validate_lineup`.
///
/// These are queries, not panics: an illegal lineup is reported back to the
/// caller with a human-readable reason and the lineup is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineupError {
    #[error("starting slot {0} is empty")]
    EmptySlot(usize),
    #[error("bench holds {0} players, maximum is 9")]
    BenchOverflow(usize),
    #[error("no goalkeeper in the starting eleven")]
    MissingGoalkeeper,
    #[error("player {0} appears more than once in the lineup")]
    DuplicatePlayer(PlayerId),
    #[error("player {0} is suspended and cannot start")]
    SuspendedStarter(PlayerId),
    #[error("player {0} is severely injured and cannot start")]
    InjuredStarter(PlayerId),
    #[error("player {0} is not part of the club squad")]
    UnknownPlayer(PlayerId),
}

pub type Result<T> = std::result::Result<T, LineupError>;
