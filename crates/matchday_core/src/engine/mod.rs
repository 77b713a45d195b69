//! Match-AI runtime: preparation, in-match decisions and their supporting
//! models.

pub mod coach;
pub mod context;
pub mod decision;
pub mod momentum;
pub mod preparation;

pub use coach::CoachProfile;
pub use context::{
    AiSensors, CompetitionKind, DecisionDelta, MatchContext, MatchLiveState, SideState, TeamSide,
};
pub use decision::{AiDecisionEngine, DecisionProfile, MAX_SUBSTITUTIONS};
pub use momentum::{team_strength, MomentumModel};
pub use preparation::{best_formation_for, prepare_all_teams};
