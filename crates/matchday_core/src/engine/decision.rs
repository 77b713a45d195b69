//! In-match AI decision engine.
//!
//! Invoked once per simulation tick per side. Stateless between calls:
//! everything is recomputed from the snapshot, and the only memory is the
//! externally persisted `last_ai_action_minute` and substitution history.
//! The engine clones the lineup before touching it and returns a
//! [`DecisionDelta`]; the external match engine decides whether to apply it.
//!
//! One engine serves both competitions. The league and cup behaviours
//! differ only in a few constants and the cup's extra sensor-reaction
//! branch, all carried by [`DecisionProfile`].

use std::collections::{HashMap, HashSet};

use log::debug;
use rand::Rng;

use crate::engine::coach::CoachProfile;
use crate::engine::context::{
    AiSensors, CompetitionKind, DecisionDelta, MatchContext, MatchLiveState, SideState, TeamSide,
};
use crate::engine::momentum::{team_strength, MomentumModel};
use crate::lineup::{assign_to_slot, calculate_fit_score, swap_players, SlotRef};
use crate::models::{Lineup, Player, PlayerId, Position, SubstitutionRecord};
use crate::tactics::catalog;
use crate::tactics::{PressingIntensity, TeamMindset, TeamTempo};

/// Hard ceiling on substitutions per side per match.
pub const MAX_SUBSTITUTIONS: u8 = 5;

/// Minutes between non-priority interventions in league play.
pub const LEAGUE_COOLDOWN_MINUTES: u32 = 4;

/// Adaptation lock in cup ties: the coach commits to a plan for longer.
pub const CUP_ADAPTATION_LOCK_MINUTES: u32 = 15;

/// Fatigue (0-100) above which a halftime substitution is considered.
pub const HALFTIME_FATIGUE_THRESHOLD: f32 = 55.0;

/// Fatigue above which an in-play substitution is considered.
pub const IN_PLAY_FATIGUE_THRESHOLD: f32 = 72.0;

/// Fit-score bonus for forwards on the bench when the side is trailing.
pub const TRAILING_ATTACKER_BONUS: f32 = 12.0;

/// Momentum shortfall against the natural target that counts as
/// underperforming.
pub const UNDERPERFORMANCE_MARGIN: f32 = 0.25;

/// Sensor reading at or above which the cup sensor branch fires.
pub const SENSOR_TRIGGER: f32 = 0.65;

/// Per-competition tuning for the decision engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionProfile {
    pub competition: CompetitionKind,
    pub cooldown_minutes: u32,
    /// Cup ties react to live sensor readings on top of the scoreline.
    pub sensor_reaction: bool,
    pub momentum_model: MomentumModel,
}

impl DecisionProfile {
    pub fn league() -> Self {
        Self {
            competition: CompetitionKind::League,
            cooldown_minutes: LEAGUE_COOLDOWN_MINUTES,
            sensor_reaction: false,
            momentum_model: MomentumModel::default(),
        }
    }

    pub fn cup() -> Self {
        Self {
            competition: CompetitionKind::Cup,
            cooldown_minutes: CUP_ADAPTATION_LOCK_MINUTES,
            sensor_reaction: true,
            momentum_model: MomentumModel::default(),
        }
    }

    pub fn for_competition(kind: CompetitionKind) -> Self {
        match kind {
            CompetitionKind::League => Self::league(),
            CompetitionKind::Cup => Self::cup(),
        }
    }
}

/// Target style for the tactic-reaction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetStyle {
    Aggressive,
    Neutral,
    Defensive,
}

impl TargetStyle {
    /// Curated formations that express the style. Switching only happens
    /// when the current formation is outside the target list, which stops
    /// the AI thrashing between equivalent shapes.
    fn candidate_formations(&self) -> &'static [&'static str] {
        match self {
            TargetStyle::Aggressive => &["4-3-3", "3-4-3", "4-2-3-1", "4-2-2-2"],
            TargetStyle::Neutral => &["4-4-2", "4-4-2-diamond", "4-3-1-2", "4-1-4-1"],
            TargetStyle::Defensive => &["4-5-1", "5-3-2", "5-4-1", "4-4-1-1"],
        }
    }

    fn instructions(&self) -> (TeamTempo, TeamMindset, PressingIntensity) {
        match self {
            TargetStyle::Aggressive => {
                (TeamTempo::Fast, TeamMindset::Attacking, PressingIntensity::High)
            }
            TargetStyle::Neutral => {
                (TeamTempo::Normal, TeamMindset::Balanced, PressingIntensity::Medium)
            }
            TargetStyle::Defensive => {
                (TeamTempo::Slow, TeamMindset::Defensive, PressingIntensity::Low)
            }
        }
    }
}

pub struct AiDecisionEngine {
    profile: DecisionProfile,
}

impl AiDecisionEngine {
    pub fn new(profile: DecisionProfile) -> Self {
        Self { profile }
    }

    pub fn for_competition(kind: CompetitionKind) -> Self {
        Self::new(DecisionProfile::for_competition(kind))
    }

    /// Evaluate one tick for one side.
    ///
    /// `is_priority` (halftime, red card, missing goalkeeper) bypasses both
    /// the cooldown window and the coach-competence roll. The substitution
    /// ladder stops at the first applicable rung; the tactic reaction runs
    /// independently and may coexist with a substitution in the same tick.
    #[allow(clippy::too_many_arguments)]
    pub fn make_decisions<R: Rng + ?Sized>(
        &self,
        state: &MatchLiveState,
        ctx: &MatchContext,
        side: TeamSide,
        is_priority: bool,
        coach: Option<&CoachProfile>,
        sensors: Option<&AiSensors>,
        rng: &mut R,
    ) -> DecisionDelta {
        let mut delta = DecisionDelta::default();
        let s = state.side(side);
        let club_name = &ctx.club(side).name;

        if !is_priority {
            if let Some(last) = s.last_ai_action_minute {
                if state.minute.saturating_sub(last) < self.profile.cooldown_minutes {
                    return delta;
                }
            }
            let coach = coach.copied().unwrap_or_default();
            if !coach.decides_to_act(rng) {
                delta
                    .logs
                    .push(format!("{}' {} bench sees no reason to intervene", state.minute, club_name));
                return delta;
            }
        }

        let players = ctx.players(side);
        let by_id: HashMap<PlayerId, &Player> = players.iter().map(|p| (p.id, p)).collect();
        let out_set: HashSet<PlayerId> = s.substituted_off().collect();

        let mut lineup = s.lineup.clone();
        let mut subs_used = s.subs_used;

        let substituted = self
            .resolve_missing_goalkeeper(
                &mut lineup, s, &by_id, &out_set, &mut subs_used, state.minute, club_name,
                &mut delta,
            )
            || self.fill_empty_slot(
                &mut lineup, s, &by_id, &out_set, &mut subs_used, state.minute, club_name,
                &mut delta,
            )
            || self.rotate_tired_or_injured(
                &mut lineup, s, state, side, &by_id, &out_set, &mut subs_used, state.minute,
                club_name, &mut delta,
            );

        self.react_tactically(s, state, ctx, side, sensors, &mut delta);

        if lineup != s.lineup {
            delta.new_lineup = Some(lineup);
        }
        if subs_used != s.subs_used {
            delta.new_subs_count = Some(subs_used);
        }
        if substituted || delta.has_action() {
            delta.last_ai_action_minute = Some(state.minute);
        }
        delta
    }

    /// Rung 1: the goal is empty. Promote a bench keeper if a substitution
    /// is available; otherwise pull the best-suited outfield starter back
    /// between the posts as a pure reshuffle (no substitution consumed).
    #[allow(clippy::too_many_arguments)]
    fn resolve_missing_goalkeeper(
        &self,
        lineup: &mut Lineup,
        s: &SideState,
        by_id: &HashMap<PlayerId, &Player>,
        out_set: &HashSet<PlayerId>,
        subs_used: &mut u8,
        minute: u32,
        club_name: &str,
        delta: &mut DecisionDelta,
    ) -> bool {
        if lineup.starting[0].is_some() {
            return false;
        }
        debug!("{club_name}: goal is empty at {minute}'");

        if *subs_used < MAX_SUBSTITUTIONS {
            let bench_keeper = best_candidate(
                lineup.bench.iter().filter_map(|id| by_id.get(id).copied()),
                Position::GK,
                s,
                out_set,
                |_| 0.0,
            );
            if let Some(keeper) = bench_keeper {
                // The keeper comes on for the occupant of the last filled
                // slot; the side keeps its reduced headcount.
                let victim = (1..lineup.starting.len())
                    .rev()
                    .find_map(|i| lineup.starting[i].map(|id| (i, id)));
                let player_out = victim.map(|(slot, out_id)| {
                    swap_players(lineup, SlotRef::Starting(slot), SlotRef::Reserves(out_id));
                    out_id
                });
                assign_to_slot(lineup, keeper.id, 0);
                *subs_used += 1;
                delta.sub_record =
                    Some(SubstitutionRecord { player_out, player_in: keeper.id, minute });
                match player_out.and_then(|id| by_id.get(&id)) {
                    Some(out) => delta.logs.push(format!(
                        "{}' {} send on keeper {}; {} makes way",
                        minute, club_name, keeper.name, out.name
                    )),
                    None => delta.logs.push(format!(
                        "{}' {} send on keeper {}",
                        minute, club_name, keeper.name
                    )),
                }
                return true;
            }
        }

        // No keeper available or no substitutions left: tactical reshuffle.
        let stand_in = lineup
            .starting
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(slot, id)| id.and_then(|id| by_id.get(&id).map(|p| (slot, *p))))
            .fold(None::<(usize, &Player, u16)>, |best, (slot, p)| {
                let score = p.attributes.positioning as u16 + p.attributes.strength as u16;
                match best {
                    Some((_, _, s)) if score <= s => best,
                    _ => Some((slot, p, score)),
                }
            });
        if let Some((slot, player, _)) = stand_in {
            swap_players(lineup, SlotRef::Starting(slot), SlotRef::Starting(0));
            delta.logs.push(format!(
                "{}' {} pull {} back between the posts, no substitution used",
                minute, club_name, player.name
            ));
            return true;
        }
        false
    }

    /// Rung 2: a non-goalkeeper slot is empty and may legally be refilled.
    #[allow(clippy::too_many_arguments)]
    fn fill_empty_slot(
        &self,
        lineup: &mut Lineup,
        s: &SideState,
        by_id: &HashMap<PlayerId, &Player>,
        out_set: &HashSet<PlayerId>,
        subs_used: &mut u8,
        minute: u32,
        club_name: &str,
        delta: &mut DecisionDelta,
    ) -> bool {
        if *subs_used >= MAX_SUBSTITUTIONS {
            return false;
        }
        // A sent-off player permanently reduces the legal headcount.
        let allowed = 11usize.saturating_sub(s.sent_off_ids.len());
        if lineup.starters_on_pitch() >= allowed {
            return false;
        }
        let Some(slot) = (1..lineup.starting.len()).find(|&i| lineup.starting[i].is_none()) else {
            return false;
        };

        let tactic = catalog::get_by_id(&lineup.tactic_id);
        let role = tactic.slots[slot].role;
        let candidate = best_candidate(
            lineup.bench.iter().filter_map(|id| by_id.get(id).copied()),
            role,
            s,
            out_set,
            |_| 0.0,
        );
        let Some(player_in) = candidate else {
            return false;
        };

        assign_to_slot(lineup, player_in.id, slot);
        *subs_used += 1;
        delta.sub_record =
            Some(SubstitutionRecord { player_out: None, player_in: player_in.id, minute });
        delta.logs.push(format!(
            "{}' {} send on {} to fill the gap at {}",
            minute,
            club_name,
            player_in.name,
            role.short_name()
        ));
        true
    }

    /// Rung 3: rotate a severely injured or exhausted starter.
    #[allow(clippy::too_many_arguments)]
    fn rotate_tired_or_injured(
        &self,
        lineup: &mut Lineup,
        s: &SideState,
        state: &MatchLiveState,
        side: TeamSide,
        by_id: &HashMap<PlayerId, &Player>,
        out_set: &HashSet<PlayerId>,
        subs_used: &mut u8,
        minute: u32,
        club_name: &str,
        delta: &mut DecisionDelta,
    ) -> bool {
        if *subs_used >= MAX_SUBSTITUTIONS {
            return false;
        }

        // Severe in-match injury anywhere in the XI comes first.
        let injured = lineup.starting.iter().enumerate().find_map(|(slot, id)| {
            id.filter(|id| {
                matches!(s.injuries.get(id), Some(crate::models::InjurySeverity::Severe))
            })
            .map(|id| (slot, id))
        });

        let threshold = if minute == 45 {
            HALFTIME_FATIGUE_THRESHOLD
        } else {
            IN_PLAY_FATIGUE_THRESHOLD
        };
        // Most fatigued outfield starter over the threshold; the keeper is
        // only rotated for injury.
        let tired = || {
            lineup
                .starting
                .iter()
                .enumerate()
                .skip(1)
                .filter_map(|(slot, id)| id.map(|id| (slot, id)))
                .filter_map(|(slot, id)| {
                    s.fatigue.get(&id).copied().map(|f| (slot, id, f))
                })
                .filter(|(_, _, f)| *f >= threshold)
                .fold(None::<(usize, PlayerId, f32)>, |worst, cur| match worst {
                    Some((_, _, wf)) if cur.2 <= wf => worst,
                    _ => Some(cur),
                })
                .map(|(slot, id, _)| (slot, id))
        };

        let Some((slot, out_id)) = injured.or_else(tired) else {
            return false;
        };

        let tactic = catalog::get_by_id(&lineup.tactic_id);
        let role = tactic.slots[slot].role;
        let trailing = s.score < state.side(side.opponent()).score;
        let candidate = best_candidate(
            lineup.bench.iter().filter_map(|id| by_id.get(id).copied()),
            role,
            s,
            out_set,
            |p| {
                if trailing && p.position == Position::FWD {
                    TRAILING_ATTACKER_BONUS
                } else {
                    0.0
                }
            },
        );
        let Some(player_in) = candidate else {
            return false;
        };

        assign_to_slot(lineup, player_in.id, slot);
        *subs_used += 1;
        delta.sub_record =
            Some(SubstitutionRecord { player_out: Some(out_id), player_in: player_in.id, minute });
        let out_name = by_id.get(&out_id).map(|p| p.name.as_str()).unwrap_or("the starter");
        if injured.is_some() {
            delta.logs.push(format!(
                "{}' {} cannot continue; {} comes on",
                minute, out_name, player_in.name
            ));
        } else {
            delta.logs.push(format!(
                "{}' {} looks spent; {} bring on {}",
                minute, out_name, club_name, player_in.name
            ));
        }
        true
    }

    /// Independent step: formation / tempo / mindset reaction to the match
    /// situation. In cup ties the sensor branch, when it fires, overrides
    /// the style the scoreline suggested.
    fn react_tactically(
        &self,
        s: &SideState,
        state: &MatchLiveState,
        ctx: &MatchContext,
        side: TeamSide,
        sensors: Option<&AiSensors>,
        delta: &mut DecisionDelta,
    ) {
        let opponent = state.side(side.opponent());
        let score_diff = s.score as i32 - opponent.score as i32;
        let remaining = 90u32.saturating_sub(state.minute);

        let own_strength = team_strength(ctx.players(side), ctx.club(side).reputation);
        let opp_strength =
            team_strength(ctx.players(side.opponent()), ctx.club(side.opponent()).reputation);
        let expected = self.profile.momentum_model.natural_target(own_strength, opp_strength);
        let underperforming = s.momentum < expected - UNDERPERFORMANCE_MARGIN;

        let mut style = if score_diff < 0 && (remaining <= 30 || underperforming) {
            TargetStyle::Aggressive
        } else if (score_diff > 1 && remaining <= 20) || (score_diff > 0 && remaining <= 10) {
            TargetStyle::Defensive
        } else {
            TargetStyle::Neutral
        };

        if self.profile.sensor_reaction {
            if let Some(readings) = sensors {
                // Aggression is checked before wing overload when both fire.
                if readings.opponent_aggression >= SENSOR_TRIGGER && score_diff >= 0 {
                    style = TargetStyle::Defensive;
                } else if readings.wing_overload >= SENSOR_TRIGGER {
                    style = TargetStyle::Defensive;
                }
            }
        }

        if !style.candidate_formations().contains(&s.lineup.tactic_id.as_str()) {
            let target = style.candidate_formations()[0];
            delta.new_tactic_id = Some(target.to_string());
            delta.logs.push(format!(
                "{}' {} switch to {}",
                state.minute,
                ctx.club(side).name,
                catalog::get_by_id(target).name
            ));
        }

        if style != TargetStyle::Neutral {
            let (tempo, mindset, intensity) = style.instructions();
            delta.new_tempo = Some(tempo);
            delta.new_mindset = Some(mindset);
            delta.new_intensity = Some(intensity);
        }
    }
}

/// Best bench candidate for `role` by fit score plus a caller-supplied
/// bonus, skipping ineligible players, the already-substituted, and anyone
/// sent off. First-found wins on equal scores.
fn best_candidate<'a>(
    candidates: impl Iterator<Item = &'a Player>,
    role: Position,
    s: &SideState,
    out_set: &HashSet<PlayerId>,
    bonus: impl Fn(&Player) -> f32,
) -> Option<&'a Player> {
    let mut best: Option<(&'a Player, f32)> = None;
    for p in candidates {
        if !p.is_available()
            || out_set.contains(&p.id)
            || s.sent_off_ids.contains(&p.id)
            || matches!(s.injuries.get(&p.id), Some(crate::models::InjurySeverity::Severe))
        {
            continue;
        }
        let score = calculate_fit_score(p, role) + bonus(p);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((p, score));
        }
    }
    best.map(|(p, _)| p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::context::SideState;
    use crate::lineup::auto_pick_lineup;
    use crate::models::{ClubColors, ClubInfo, Health, InjurySeverity, PlayerAttributes};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn player(id: u32, position: Position, overall: u8, attributes: PlayerAttributes) -> Player {
        Player {
            id,
            name: format!("P{id}"),
            position,
            overall,
            attributes,
            condition: 100,
            health: Health::Healthy,
            suspension_matches: 0,
        }
    }

    /// 18 players: two keepers, a full outfield, a six-man bench pool.
    fn squad() -> Vec<Player> {
        let mut squad = vec![
            player(
                1,
                Position::GK,
                75,
                PlayerAttributes { goalkeeping: 80, positioning: 40, ..Default::default() },
            ),
            player(
                30,
                Position::GK,
                65,
                PlayerAttributes { goalkeeping: 70, positioning: 35, ..Default::default() },
            ),
            player(
                2,
                Position::DEF,
                70,
                PlayerAttributes {
                    defending: 75,
                    strength: 80,
                    positioning: 80,
                    ..Default::default()
                },
            ),
        ];
        for id in 3..=5 {
            squad.push(player(
                id,
                Position::DEF,
                70,
                PlayerAttributes {
                    defending: 70,
                    strength: 60,
                    positioning: 50,
                    ..Default::default()
                },
            ));
        }
        for id in 6..=9 {
            squad.push(player(
                id,
                Position::MID,
                70,
                PlayerAttributes { passing: 70, vision: 60, technique: 55, ..Default::default() },
            ));
        }
        for id in 10..=11 {
            squad.push(player(
                id,
                Position::FWD,
                70,
                PlayerAttributes { finishing: 70, attacking: 65, pace: 60, ..Default::default() },
            ));
        }
        squad.push(player(
            12,
            Position::DEF,
            65,
            PlayerAttributes { defending: 60, strength: 55, positioning: 45, ..Default::default() },
        ));
        squad.push(player(
            13,
            Position::MID,
            65,
            PlayerAttributes { passing: 80, vision: 50, technique: 50, ..Default::default() },
        ));
        squad.push(player(
            14,
            Position::MID,
            64,
            PlayerAttributes { passing: 50, vision: 40, technique: 40, ..Default::default() },
        ));
        squad.push(player(
            15,
            Position::FWD,
            66,
            PlayerAttributes { finishing: 60, attacking: 55, pace: 70, ..Default::default() },
        ));
        squad.push(player(
            16,
            Position::FWD,
            60,
            PlayerAttributes { finishing: 50, attacking: 45, ..Default::default() },
        ));
        squad.push(player(
            17,
            Position::MID,
            60,
            PlayerAttributes { passing: 40, ..Default::default() },
        ));
        squad
    }

    fn club(id: u32, name: &str) -> ClubInfo {
        ClubInfo {
            id,
            name: name.to_string(),
            colors: ClubColors { primary: "red".to_string(), secondary: "white".to_string() },
            reputation: 5000,
        }
    }

    fn context() -> MatchContext {
        MatchContext {
            home_club: club(1, "Home FC"),
            away_club: club(2, "Away United"),
            home_players: squad(),
            away_players: squad(),
            competition: CompetitionKind::League,
            home_advantage: true,
        }
    }

    fn live_state(minute: u32) -> MatchLiveState {
        MatchLiveState {
            minute,
            home: SideState::new(auto_pick_lineup(1, &squad(), "4-4-2")),
            away: SideState::new(auto_pick_lineup(2, &squad(), "4-4-2")),
        }
    }

    fn league_engine() -> AiDecisionEngine {
        AiDecisionEngine::new(DecisionProfile::league())
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(9)
    }

    #[test]
    fn missing_keeper_is_replaced_from_the_bench() {
        let ctx = context();
        let mut state = live_state(30);
        // Keeper sent off: slot 0 empties and the keeper leaves the pool.
        state.home.lineup.starting[0] = None;
        state.home.sent_off_ids.push(1);

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        // The backup keeper comes on for the occupant of the last filled
        // slot (the second striker), and a substitution is consumed.
        assert_eq!(
            delta.sub_record,
            Some(SubstitutionRecord { player_out: Some(11), player_in: 30, minute: 30 })
        );
        assert_eq!(delta.new_subs_count, Some(1));
        let lineup = delta.new_lineup.expect("lineup must change");
        assert_eq!(lineup.starting[0], Some(30));
        assert_eq!(lineup.starting[10], None);
        assert!(lineup.reserves.contains(&11));
        assert_eq!(delta.last_ai_action_minute, Some(30));
    }

    #[test]
    fn keeper_loss_without_backup_reshuffles_instead() {
        let roster: Vec<Player> = squad().into_iter().filter(|p| p.id != 30).collect();
        let mut ctx = context();
        ctx.home_players = roster.clone();
        let mut state = live_state(30);
        state.home.lineup = auto_pick_lineup(1, &roster, "4-4-2");
        state.home.lineup.starting[0] = None;
        state.home.sent_off_ids.push(1);
        state.home.subs_used = 2;

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        // No keeper on the bench: the sturdiest outfield starter goes in
        // goal and no substitution is spent.
        assert_eq!(delta.sub_record, None);
        assert_eq!(delta.new_subs_count, None);
        let lineup = delta.new_lineup.expect("reshuffle must change the lineup");
        assert_eq!(lineup.starting[0], Some(2));
        assert_eq!(lineup.starters_on_pitch(), 10);
    }

    #[test]
    fn empty_outfield_slot_is_refilled_when_legal() {
        let ctx = context();
        let mut state = live_state(55);
        // A starter left the pitch injured without being substituted.
        state.home.lineup.starting[5] = None;
        state.home.lineup.reserves.push(6);
        state.home.injuries.insert(6, InjurySeverity::Severe);

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        assert_eq!(
            delta.sub_record,
            Some(SubstitutionRecord { player_out: None, player_in: 13, minute: 55 })
        );
        assert_eq!(delta.new_subs_count, Some(1));
        let lineup = delta.new_lineup.expect("slot must be refilled");
        assert_eq!(lineup.starting[5], Some(13));
        assert!(!lineup.bench.contains(&13));
    }

    #[test]
    fn red_card_gap_stays_open() {
        let ctx = context();
        let mut state = live_state(55);
        state.home.lineup.starting[5] = None;
        state.home.sent_off_ids.push(6);

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        assert_eq!(delta.sub_record, None);
        assert_eq!(delta.new_lineup, None);
        assert!(!delta.has_action());
    }

    #[test]
    fn exhausted_substitutions_block_every_rung() {
        let ctx = context();
        let mut state = live_state(60);
        state.home.subs_used = MAX_SUBSTITUTIONS;
        state.home.lineup.starting[9] = None;
        state.home.lineup.reserves.push(10);
        state.home.fatigue.insert(7, 90.0);

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        assert_eq!(delta.sub_record, None);
        assert_eq!(delta.new_subs_count, None);
        assert_eq!(delta.new_lineup, None);
    }

    #[test]
    fn tired_starter_is_rotated_off() {
        let ctx = context();
        let mut state = live_state(60);
        state.home.fatigue.insert(7, 85.0);

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        // Slot 6 holds player 7; the best-passing bench midfielder comes on.
        assert_eq!(
            delta.sub_record,
            Some(SubstitutionRecord { player_out: Some(7), player_in: 13, minute: 60 })
        );
        let lineup = delta.new_lineup.expect("rotation changes the lineup");
        assert_eq!(lineup.starting[6], Some(13));
    }

    #[test]
    fn halftime_rotates_at_a_looser_threshold() {
        let ctx = context();
        let mut in_play = live_state(60);
        in_play.home.fatigue.insert(7, 60.0);
        let delta = league_engine().make_decisions(
            &in_play,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );
        assert_eq!(delta.sub_record, None);

        let mut halftime = live_state(45);
        halftime.home.fatigue.insert(7, 60.0);
        let delta = league_engine().make_decisions(
            &halftime,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );
        assert_eq!(delta.sub_record.map(|r| r.player_out), Some(Some(7)));
    }

    #[test]
    fn severe_injury_forces_a_substitution() {
        let ctx = context();
        let mut state = live_state(20);
        state.home.injuries.insert(3, InjurySeverity::Severe);

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        // Player 3 holds a defensive slot; the bench defender steps in.
        assert_eq!(
            delta.sub_record,
            Some(SubstitutionRecord { player_out: Some(3), player_in: 12, minute: 20 })
        );
        let lineup = delta.new_lineup.expect("injury substitution changes the lineup");
        assert!(!lineup.bench.contains(&12));
        assert!(!lineup.starting.contains(&Some(3)));
    }

    #[test]
    fn substituted_players_never_come_back() {
        let ctx = context();
        let mut state = live_state(70);
        state.home.fatigue.insert(7, 85.0);
        // Player 13 already came off earlier and must be skipped even
        // though the bench holds no better fit.
        state.home.sub_history.push(SubstitutionRecord {
            player_out: Some(13),
            player_in: 17,
            minute: 50,
        });

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        assert_eq!(delta.sub_record.map(|r| r.player_in), Some(14));
    }

    #[test]
    fn trailing_side_prefers_a_forward_on_equal_footing() {
        let mut ctx = context();
        for p in ctx.home_players.iter_mut() {
            p.attributes = match p.id {
                13 => PlayerAttributes { passing: 10, ..Default::default() },
                15 => PlayerAttributes { passing: 1, ..Default::default() },
                _ => PlayerAttributes::default(),
            };
        }

        let mut level = live_state(60);
        level.home.fatigue.insert(7, 85.0);
        let delta = league_engine().make_decisions(
            &level,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );
        assert_eq!(delta.sub_record.map(|r| r.player_in), Some(13));

        let mut trailing = live_state(60);
        trailing.home.fatigue.insert(7, 85.0);
        trailing.away.score = 1;
        let delta = league_engine().make_decisions(
            &trailing,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );
        // The attacker bonus tips the pick to the fresh forward.
        assert_eq!(delta.sub_record.map(|r| r.player_in), Some(15));
    }

    #[test]
    fn cooldown_blocks_routine_interventions() {
        let ctx = context();
        let mut state = live_state(60);
        state.home.fatigue.insert(7, 90.0);
        state.home.last_ai_action_minute = Some(58);

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            false,
            None,
            None,
            &mut rng(),
        );
        assert_eq!(delta, DecisionDelta::default());

        // Priority ticks ignore the window entirely.
        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );
        assert!(delta.sub_record.is_some());
    }

    #[test]
    fn cup_adaptation_lock_is_longer() {
        let ctx = context();
        let mut state = live_state(70);
        state.home.fatigue.insert(7, 90.0);
        state.home.last_ai_action_minute = Some(60);

        // Ten minutes since the last action: a league coach may act again,
        // a cup coach is still committed to the plan.
        let cup = AiDecisionEngine::new(DecisionProfile::cup()).make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            false,
            Some(&CoachProfile::new(20, 20)),
            None,
            &mut rng(),
        );
        assert_eq!(cup, DecisionDelta::default());
    }

    #[test]
    fn trailing_late_goes_aggressive() {
        let ctx = context();
        let mut state = live_state(70);
        state.away.score = 1;

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        assert_eq!(delta.new_tactic_id.as_deref(), Some("4-3-3"));
        assert_eq!(delta.new_tempo, Some(TeamTempo::Fast));
        assert_eq!(delta.new_mindset, Some(TeamMindset::Attacking));
        assert_eq!(delta.new_intensity, Some(PressingIntensity::High));
        assert_eq!(delta.last_ai_action_minute, Some(70));
    }

    #[test]
    fn narrow_lead_late_shuts_up_shop() {
        let ctx = context();
        let mut state = live_state(82);
        state.home.score = 1;

        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );

        assert_eq!(delta.new_tactic_id.as_deref(), Some("4-5-1"));
        assert_eq!(delta.new_tempo, Some(TeamTempo::Slow));
        assert_eq!(delta.new_mindset, Some(TeamMindset::Defensive));
    }

    #[test]
    fn level_midgame_stays_neutral() {
        let ctx = context();
        let state = live_state(30);
        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            None,
            &mut rng(),
        );
        assert_eq!(delta.new_tactic_id, None);
        assert_eq!(delta.new_tempo, None);
        assert!(!delta.has_action());
    }

    #[test]
    fn cup_sensors_override_the_scoreline() {
        let ctx = context();
        let state = live_state(70);
        let sensors = AiSensors { opponent_aggression: 0.8, wing_overload: 0.0 };

        let delta = AiDecisionEngine::new(DecisionProfile::cup()).make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            Some(&sensors),
            &mut rng(),
        );
        assert_eq!(delta.new_tactic_id.as_deref(), Some("4-5-1"));
        assert_eq!(delta.new_mindset, Some(TeamMindset::Defensive));

        // League play never reads the sensors.
        let delta = league_engine().make_decisions(
            &state,
            &ctx,
            TeamSide::Home,
            true,
            None,
            Some(&sensors),
            &mut rng(),
        );
        assert_eq!(delta.new_tactic_id, None);
    }

    #[test]
    fn decisions_are_reproducible_for_a_fixed_seed() {
        let ctx = context();
        let mut state = live_state(60);
        state.home.fatigue.insert(7, 85.0);

        for seed in [1u64, 7, 42] {
            let mut a = ChaCha8Rng::seed_from_u64(seed);
            let mut b = ChaCha8Rng::seed_from_u64(seed);
            let da = league_engine().make_decisions(
                &state, &ctx, TeamSide::Home, false, None, None, &mut a,
            );
            let db = league_engine().make_decisions(
                &state, &ctx, TeamSide::Home, false, None, None, &mut b,
            );
            assert_eq!(da, db);
        }
    }

    #[test]
    fn hesitant_coach_sometimes_only_narrates() {
        let ctx = context();
        let mut state = live_state(60);
        state.home.fatigue.insert(7, 85.0);
        let novice = CoachProfile::new(0, 0);

        let mut acted = 0;
        let mut sat_out = 0;
        for seed in 0..100u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let delta = league_engine().make_decisions(
                &state,
                &ctx,
                TeamSide::Home,
                false,
                Some(&novice),
                None,
                &mut rng,
            );
            if delta.has_action() {
                acted += 1;
            } else {
                assert_eq!(delta.logs.len(), 1, "a skipped tick still narrates");
                sat_out += 1;
            }
        }
        assert!(acted > 0, "the novice never acted in 100 ticks");
        assert!(sat_out > 0, "the novice never hesitated in 100 ticks");
    }
}
