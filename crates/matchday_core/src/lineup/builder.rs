//! Initial lineup construction.
//!
//! Builds the 11 / bench / reserves partition of a squad for a target
//! formation. Degrades gracefully: an undersized squad produces null slots
//! and a short bench, never an error.

use std::collections::HashSet;

use crate::models::{Lineup, Player, PlayerId, BENCH_CAPACITY};
use crate::tactics::catalog;

/// Pick a starting XI, bench and reserves for `players`.
///
/// Eligibility: no remaining suspension and no severe injury. Assignment
/// order is rating-descending with the player id as a stable tiebreak so
/// identical inputs always produce identical lineups:
/// 1. best eligible goalkeeper to slot 0;
/// 2. slots 1..10 in index order, natural-position candidates first, any
///    remaining eligible body as an out-of-position fallback;
/// 3. bench: one backup goalkeeper reserved first, then best by rating up
///    to 9;
/// 4. reserves: everyone else, including ineligible players.
pub fn auto_pick_lineup(club_id: u32, players: &[Player], tactic_id: &str) -> Lineup {
    let tactic = catalog::get_by_id(tactic_id);

    let mut eligible: Vec<&Player> = players.iter().filter(|p| p.is_available()).collect();
    eligible.sort_by(|a, b| b.overall.cmp(&a.overall).then(a.id.cmp(&b.id)));

    let mut lineup = Lineup::empty(club_id, tactic.id.clone());
    let mut used: HashSet<PlayerId> = HashSet::new();

    if let Some(gk) = eligible.iter().find(|p| p.position.is_goalkeeper()) {
        lineup.starting[0] = Some(gk.id);
        used.insert(gk.id);
    }

    for slot in tactic.slots.iter().skip(1) {
        let pick = eligible
            .iter()
            .find(|p| !used.contains(&p.id) && p.position == slot.role)
            .or_else(|| eligible.iter().find(|p| !used.contains(&p.id)));
        if let Some(p) = pick {
            lineup.starting[slot.index] = Some(p.id);
            used.insert(p.id);
        }
    }

    // Reserve a backup goalkeeper before filling the bench by rating.
    if let Some(gk) = eligible.iter().find(|p| !used.contains(&p.id) && p.position.is_goalkeeper())
    {
        lineup.bench.push(gk.id);
        used.insert(gk.id);
    }
    for p in &eligible {
        if lineup.bench.len() >= BENCH_CAPACITY {
            break;
        }
        if used.insert(p.id) {
            lineup.bench.push(p.id);
        }
    }

    lineup.reserves = players.iter().map(|p| p.id).filter(|id| !used.contains(id)).collect();

    lineup
}
