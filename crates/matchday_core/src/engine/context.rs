//! Match snapshot contracts.
//!
//! `MatchContext` is immutable per match; `MatchLiveState` is owned and
//! mutated by the external match engine and read-only here. The decision
//! engine never mutates a snapshot in place: it clones what it needs and
//! returns a [`DecisionDelta`] the match engine may apply.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ClubInfo, InjurySeverity, Lineup, Player, PlayerId, SubstitutionRecord};
use crate::tactics::{PressingIntensity, TeamMindset, TeamTempo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompetitionKind {
    #[default]
    League,
    Cup,
}

/// Everything the AI reads about one side of a live match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideState {
    pub score: u8,
    pub lineup: Lineup,
    /// Accumulated fatigue per player, 0-100; higher is more tired.
    pub fatigue: HashMap<PlayerId, f32>,
    /// In-match injuries not yet reflected in the roster snapshot.
    pub injuries: HashMap<PlayerId, InjurySeverity>,
    pub sent_off_ids: Vec<PlayerId>,
    pub subs_used: u8,
    pub sub_history: Vec<SubstitutionRecord>,
    /// Run-of-play momentum, -1.0 (collapsing) to 1.0 (dominant).
    pub momentum: f32,
    /// Minute of the last AI intervention, used for cooldown gating.
    pub last_ai_action_minute: Option<u32>,
}

impl SideState {
    pub fn new(lineup: Lineup) -> Self {
        Self {
            score: 0,
            lineup,
            fatigue: HashMap::new(),
            injuries: HashMap::new(),
            sent_off_ids: Vec::new(),
            subs_used: 0,
            sub_history: Vec::new(),
            momentum: 0.0,
            last_ai_action_minute: None,
        }
    }

    /// Ids already substituted off; these may never re-enter.
    pub fn substituted_off(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.sub_history.iter().filter_map(|r| r.player_out)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchLiveState {
    pub minute: u32,
    pub home: SideState,
    pub away: SideState,
}

impl MatchLiveState {
    pub fn side(&self, side: TeamSide) -> &SideState {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }
}

/// Static per-match information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchContext {
    pub home_club: ClubInfo,
    pub away_club: ClubInfo,
    pub home_players: Vec<Player>,
    pub away_players: Vec<Player>,
    pub competition: CompetitionKind,
    pub home_advantage: bool,
}

impl MatchContext {
    pub fn club(&self, side: TeamSide) -> &ClubInfo {
        match side {
            TeamSide::Home => &self.home_club,
            TeamSide::Away => &self.away_club,
        }
    }

    pub fn players(&self, side: TeamSide) -> &[Player] {
        match side {
            TeamSide::Home => &self.home_players,
            TeamSide::Away => &self.away_players,
        }
    }
}

/// Live readings the cup-tie AI reacts to on top of the scoreline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AiSensors {
    /// How aggressively the opponent is playing, 0.0-1.0.
    pub opponent_aggression: f32,
    /// How much of the opponent's play runs through the wings, 0.0-1.0.
    pub wing_overload: f32,
}

/// State delta proposed by the decision engine.
///
/// All fields are absent when no action was taken; `logs` carries the
/// broadcast narration lines in chronological order either way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionDelta {
    pub new_lineup: Option<Lineup>,
    pub new_subs_count: Option<u8>,
    pub sub_record: Option<SubstitutionRecord>,
    pub new_tactic_id: Option<String>,
    pub new_tempo: Option<TeamTempo>,
    pub new_mindset: Option<TeamMindset>,
    pub new_intensity: Option<PressingIntensity>,
    pub last_ai_action_minute: Option<u32>,
    pub logs: Vec<String>,
}

impl DecisionDelta {
    /// True when the engine proposed any change (narration alone does not
    /// count).
    pub fn has_action(&self) -> bool {
        self.new_lineup.is_some()
            || self.new_subs_count.is_some()
            || self.sub_record.is_some()
            || self.new_tactic_id.is_some()
            || self.new_tempo.is_some()
            || self.new_mindset.is_some()
            || self.new_intensity.is_some()
    }
}
