//! Lineup repair.
//!
//! Rebuilds a legal lineup after availability has changed between matches
//! (injuries healed or worsened, suspensions served, condition recovered).
//! The defining algorithm is a strict fallback cascade: freshness dominates
//! positional match, which dominates raw rating. The phases must run in
//! order; merging them into one weighted score changes behaviour.

use std::collections::HashSet;

use crate::models::{Lineup, Player, PlayerId, Position, BENCH_CAPACITY};
use crate::tactics::catalog;

/// Condition at or above which a player counts as fresh.
pub const FRESH_CONDITION_THRESHOLD: u8 = 87;

/// Role targets used to fill the bench, in order.
pub const BENCH_ROLE_TEMPLATE: [Position; BENCH_CAPACITY] = [
    Position::GK,
    Position::DEF,
    Position::DEF,
    Position::MID,
    Position::MID,
    Position::MID,
    Position::FWD,
    Position::FWD,
    Position::MID,
];

/// Re-derive a valid lineup for the squad, keeping the current formation.
///
/// Cascade, strictly in this order, each phase skipping already-used ids:
/// 1. goalkeeper: fresh keeper, else tired keeper;
/// 2. field slots, fresh players in their natural role;
/// 3. field slots still empty, any fresh non-keeper;
/// 4. field slots still empty, tired players in their natural role;
/// 5. field slots still empty, anyone eligible;
/// 6. bench via [`BENCH_ROLE_TEMPLATE`], each target role searched
///    fresh-matching, fresh-any, tired-matching, tired-any;
/// 7. reserves: every remaining squad member, including ineligible ones.
pub fn repair_lineup(lineup: &Lineup, players: &[Player]) -> Lineup {
    let tactic = catalog::get_by_id(&lineup.tactic_id);

    let mut fresh: Vec<&Player> = Vec::new();
    let mut tired: Vec<&Player> = Vec::new();
    for p in players.iter().filter(|p| p.is_available()) {
        if p.condition >= FRESH_CONDITION_THRESHOLD {
            fresh.push(p);
        } else {
            tired.push(p);
        }
    }
    let by_rating = |a: &&Player, b: &&Player| b.overall.cmp(&a.overall).then(a.id.cmp(&b.id));
    fresh.sort_by(by_rating);
    tired.sort_by(by_rating);

    let mut repaired = Lineup::empty(lineup.club_id, lineup.tactic_id.clone());
    let mut used: HashSet<PlayerId> = HashSet::new();

    // Phase 1: goalkeeper, freshness first.
    let keeper = fresh
        .iter()
        .find(|p| p.position.is_goalkeeper())
        .or_else(|| tired.iter().find(|p| p.position.is_goalkeeper()));
    if let Some(gk) = keeper {
        repaired.starting[0] = Some(gk.id);
        used.insert(gk.id);
    }

    // Phase 2: fresh players in their natural role.
    for slot in tactic.slots.iter().skip(1) {
        if let Some(p) =
            fresh.iter().find(|p| !used.contains(&p.id) && p.position == slot.role)
        {
            repaired.starting[slot.index] = Some(p.id);
            used.insert(p.id);
        }
    }

    // Phase 3: any fresh body that is not a keeper.
    for slot in tactic.slots.iter().skip(1) {
        if repaired.starting[slot.index].is_some() {
            continue;
        }
        if let Some(p) =
            fresh.iter().find(|p| !used.contains(&p.id) && !p.position.is_goalkeeper())
        {
            repaired.starting[slot.index] = Some(p.id);
            used.insert(p.id);
        }
    }

    // Phase 4: tired players in their natural role.
    for slot in tactic.slots.iter().skip(1) {
        if repaired.starting[slot.index].is_some() {
            continue;
        }
        if let Some(p) =
            tired.iter().find(|p| !used.contains(&p.id) && p.position == slot.role)
        {
            repaired.starting[slot.index] = Some(p.id);
            used.insert(p.id);
        }
    }

    // Phase 5: last resort, anyone eligible.
    for slot in tactic.slots.iter().skip(1) {
        if repaired.starting[slot.index].is_some() {
            continue;
        }
        if let Some(p) =
            fresh.iter().chain(tired.iter()).find(|p| !used.contains(&p.id))
        {
            repaired.starting[slot.index] = Some(p.id);
            used.insert(p.id);
        }
    }

    // Phase 6: bench, one template role at a time.
    for role in BENCH_ROLE_TEMPLATE {
        let candidate = fresh
            .iter()
            .find(|p| !used.contains(&p.id) && p.position == role)
            .or_else(|| fresh.iter().find(|p| !used.contains(&p.id)))
            .or_else(|| tired.iter().find(|p| !used.contains(&p.id) && p.position == role))
            .or_else(|| tired.iter().find(|p| !used.contains(&p.id)));
        if let Some(p) = candidate {
            repaired.bench.push(p.id);
            used.insert(p.id);
        }
    }

    // Phase 7: reserves catch everyone else.
    repaired.reserves =
        players.iter().map(|p| p.id).filter(|id| !used.contains(id)).collect();

    repaired
}
