//! Pre-match preparation for AI-managed clubs.
//!
//! Runs once before each matchday: picks the best formation for the
//! currently available squad and repairs every AI club's lineup. The
//! user-controlled club is never touched.

use std::collections::HashMap;

use log::debug;

use crate::lineup::{auto_pick_lineup, repair_lineup};
use crate::models::{ClubId, Lineup, Player};
use crate::tactics::catalog::{self, Tactic};
use crate::tactics::DEFAULT_TACTIC_ID;

/// Condition cutoff for the formation-analysis squad.
pub const ANALYSIS_FRESH_THRESHOLD: u8 = 87;

/// Widened cutoff used when the fresh squad is too thin to judge.
pub const ANALYSIS_WIDE_THRESHOLD: u8 = 75;

/// Minimum analysis-squad size before the cutoff widens.
pub const ANALYSIS_MIN_SQUAD: usize = 14;

/// Charged for a slot with no natural-position candidate.
pub const MISSING_ROLE_PENALTY: f32 = -50.0;

/// Prepare every club except `user_team_id` for the next match.
///
/// For each AI club: evaluate every catalog formation against the fresh
/// squad, then build a lineup with the winner (or upgrade a club still on
/// the default formation; a club that has already diverged from the
/// default keeps its choice). Repair always runs last so availability is
/// enforced no matter which path produced the lineup.
pub fn prepare_all_teams(
    clubs: &[crate::models::ClubInfo],
    players_map: &HashMap<ClubId, Vec<Player>>,
    current_lineups: &HashMap<ClubId, Lineup>,
    user_team_id: ClubId,
) -> HashMap<ClubId, Lineup> {
    let mut prepared = HashMap::new();

    for club in clubs {
        if club.id == user_team_id {
            continue;
        }
        let Some(squad) = players_map.get(&club.id) else {
            continue;
        };

        let best = best_formation_for(squad);
        debug!("preparing {}: best formation {}", club.name, best.id);

        let lineup = match current_lineups.get(&club.id) {
            None => auto_pick_lineup(club.id, squad, &best.id),
            Some(current) if current.tactic_id == DEFAULT_TACTIC_ID && best.id != DEFAULT_TACTIC_ID => {
                let mut upgraded = current.clone();
                upgraded.tactic_id = best.id.clone();
                upgraded
            }
            Some(current) => current.clone(),
        };

        prepared.insert(club.id, repair_lineup(&lineup, squad));
    }

    prepared
}

/// Brute-force formation evaluation over the whole catalog.
///
/// The catalog is small, so every formation is scored exactly: per slot,
/// the rating of the best not-yet-counted natural-role candidate, or
/// [`MISSING_ROLE_PENALTY`] when the analysis squad has nobody left for
/// that role. Ties keep the earlier catalog entry.
pub fn best_formation_for(squad: &[Player]) -> &'static Tactic {
    let mut analysis: Vec<&Player> = squad
        .iter()
        .filter(|p| p.is_available() && p.condition >= ANALYSIS_FRESH_THRESHOLD)
        .collect();
    if analysis.len() < ANALYSIS_MIN_SQUAD {
        analysis = squad
            .iter()
            .filter(|p| p.is_available() && p.condition >= ANALYSIS_WIDE_THRESHOLD)
            .collect();
    }
    analysis.sort_by(|a, b| b.overall.cmp(&a.overall).then(a.id.cmp(&b.id)));

    let mut best: Option<(&'static Tactic, f32)> = None;
    for tactic in catalog::all() {
        let mut used = vec![false; analysis.len()];
        let mut score = 0.0;
        for slot in &tactic.slots {
            let candidate = analysis
                .iter()
                .enumerate()
                .find(|(i, p)| !used[*i] && p.position == slot.role);
            match candidate {
                Some((i, p)) => {
                    used[i] = true;
                    score += p.overall as f32;
                }
                None => score += MISSING_ROLE_PENALTY,
            }
        }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((tactic, score));
        }
    }

    // The catalog is never empty.
    best.map(|(t, _)| t).unwrap_or_else(catalog::default_tactic)
}
