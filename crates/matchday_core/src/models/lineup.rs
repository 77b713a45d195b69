use serde::{Deserialize, Serialize};

use super::{ClubId, PlayerId};

/// Fixed number of starting slots. Slot 0 is the goalkeeper by convention.
pub const STARTING_SLOTS: usize = 11;

/// Maximum number of players on the bench.
pub const BENCH_CAPACITY: usize = 9;

/// Per-club matchday squad partition.
///
/// Invariants:
/// - `starting` always has exactly 11 entries; `None` marks an unfilled or
///   red-carded slot.
/// - a player id appears in at most one of starting / bench / reserves.
/// - `bench` never exceeds [`BENCH_CAPACITY`].
///
/// The mutator in `lineup::mutator` is the single place that moves players
/// between the three buckets, which is where these invariants are enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub club_id: ClubId,
    pub tactic_id: String,
    pub starting: [Option<PlayerId>; STARTING_SLOTS],
    pub bench: Vec<PlayerId>,
    pub reserves: Vec<PlayerId>,
}

impl Lineup {
    pub fn empty(club_id: ClubId, tactic_id: impl Into<String>) -> Self {
        Self {
            club_id,
            tactic_id: tactic_id.into(),
            starting: [None; STARTING_SLOTS],
            bench: Vec::new(),
            reserves: Vec::new(),
        }
    }

    /// Number of occupied starting slots.
    pub fn starters_on_pitch(&self) -> usize {
        self.starting.iter().filter(|s| s.is_some()).count()
    }

    /// Starting slot currently occupied by `id`, if any.
    pub fn starting_slot_of(&self, id: PlayerId) -> Option<usize> {
        self.starting.iter().position(|s| *s == Some(id))
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.starting_slot_of(id).is_some()
            || self.bench.contains(&id)
            || self.reserves.contains(&id)
    }

    /// Every player id in the lineup, starting XI first.
    pub fn all_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.starting
            .iter()
            .flatten()
            .copied()
            .chain(self.bench.iter().copied())
            .chain(self.reserves.iter().copied())
    }
}

/// One substitution, append-only per club per match.
///
/// `player_out` is `None` when the substitute fills a slot that was already
/// empty (the matchday sheet shows these as "NONE"). A player recorded as
/// going off may never re-enter the same match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRecord {
    pub player_out: Option<PlayerId>,
    pub player_in: PlayerId,
    pub minute: u32,
}
