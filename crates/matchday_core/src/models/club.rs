use serde::{Deserialize, Serialize};

pub type ClubId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubColors {
    pub primary: String,
    pub secondary: String,
}

/// Narrow view of a club: only the fields this core actually reads.
///
/// The full club entity lives in the management layer; the AI core needs an
/// identity for lineups, a name for narration, colors for the broadcast feed
/// and a reputation scalar for the momentum strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubInfo {
    pub id: ClubId,
    pub name: String,
    pub colors: ClubColors,
    /// World reputation, 0-10000.
    pub reputation: u16,
}
