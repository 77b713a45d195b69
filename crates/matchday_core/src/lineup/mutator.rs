//! Low-level lineup mutation primitives.
//!
//! Every higher-level substitution path funnels through [`swap_players`] or
//! [`assign_to_slot`], so the no-duplicate and bench-capacity invariants are
//! enforced in exactly one place. Legality of the *result* (goalkeeper
//! present, no suspended starters) is the caller's job via
//! [`validate_lineup`]; the mutator itself trusts its caller.

use std::collections::HashSet;

use crate::error::LineupError;
use crate::models::{Lineup, Player, PlayerId, BENCH_CAPACITY, STARTING_SLOTS};

/// A location inside a lineup that can hold a player.
///
/// Starting slots are addressed by index because an empty slot is a valid
/// swap endpoint; bench and reserves are addressed by occupant id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRef {
    Starting(usize),
    Bench(PlayerId),
    Reserves(PlayerId),
}

fn occupant(lineup: &Lineup, slot: SlotRef) -> Option<PlayerId> {
    match slot {
        SlotRef::Starting(idx) => lineup.starting.get(idx).copied().flatten(),
        SlotRef::Bench(id) => lineup.bench.contains(&id).then_some(id),
        SlotRef::Reserves(id) => lineup.reserves.contains(&id).then_some(id),
    }
}

fn remove_everywhere(lineup: &mut Lineup, id: PlayerId) {
    for slot in lineup.starting.iter_mut() {
        if *slot == Some(id) {
            *slot = None;
        }
    }
    lineup.bench.retain(|b| *b != id);
    lineup.reserves.retain(|r| *r != id);
}

fn place(lineup: &mut Lineup, slot: SlotRef, id: Option<PlayerId>) {
    match slot {
        SlotRef::Starting(idx) => {
            if idx < STARTING_SLOTS {
                lineup.starting[idx] = id;
            } else if let Some(id) = id {
                // Out-of-range index degrades to reserves.
                lineup.reserves.push(id);
            }
        }
        SlotRef::Bench(_) => {
            if let Some(id) = id {
                lineup.bench.push(id);
            }
        }
        SlotRef::Reserves(_) => {
            if let Some(id) = id {
                lineup.reserves.push(id);
            }
        }
    }
}

fn enforce_bench_cap(lineup: &mut Lineup) {
    while lineup.bench.len() > BENCH_CAPACITY {
        if let Some(overflow) = lineup.bench.pop() {
            lineup.reserves.push(overflow);
        }
    }
}

/// Exchange the occupants of two lineup locations.
///
/// Either end may be empty (an unoccupied starting slot, or a bench/reserve
/// reference to a player not currently in that bucket). Afterwards neither
/// id appears twice anywhere in the lineup and the bench stays capped at 9,
/// overflow spilling into reserves.
pub fn swap_players(lineup: &mut Lineup, source: SlotRef, target: SlotRef) {
    if source == target {
        return;
    }
    let from_source = occupant(lineup, source);
    let from_target = occupant(lineup, target);

    if let Some(id) = from_source {
        remove_everywhere(lineup, id);
    }
    if let Some(id) = from_target {
        remove_everywhere(lineup, id);
    }

    place(lineup, target, from_source);
    place(lineup, source, from_target);
    enforce_bench_cap(lineup);
}

/// Force-place `player_id` into a starting slot, displacing any current
/// occupant to reserves. The incoming player is stripped from bench and
/// reserves first. Out-of-range indices are ignored.
pub fn assign_to_slot(lineup: &mut Lineup, player_id: PlayerId, slot_idx: usize) {
    if slot_idx >= STARTING_SLOTS {
        return;
    }
    remove_everywhere(lineup, player_id);
    if let Some(displaced) = lineup.starting[slot_idx].take() {
        lineup.reserves.push(displaced);
    }
    lineup.starting[slot_idx] = Some(player_id);
}

/// Move suspended or severely injured players out of the starting XI and
/// bench into reserves. Starting slots are left as `null` holes; compaction
/// is the repair engine's job and runs separately.
pub fn evict_suspended_players(lineup: &mut Lineup, players: &[Player]) {
    let banned: HashSet<PlayerId> =
        players.iter().filter(|p| !p.is_available()).map(|p| p.id).collect();

    for slot in lineup.starting.iter_mut() {
        if let Some(id) = *slot {
            if banned.contains(&id) {
                *slot = None;
                lineup.reserves.push(id);
            }
        }
    }

    let mut evicted_bench = Vec::new();
    lineup.bench.retain(|id| {
        if banned.contains(id) {
            evicted_bench.push(*id);
            false
        } else {
            true
        }
    });
    lineup.reserves.extend(evicted_bench);
}

/// Pre-flight legality check. Pure query; the lineup is never touched.
///
/// Fails on: any empty starting slot, bench over capacity, duplicate ids,
/// no goalkeeper among the starters, or a suspended / severely injured
/// starter. The error's `Display` is the human-readable reason.
pub fn validate_lineup(lineup: &Lineup, players: &[Player]) -> Result<(), LineupError> {
    if let Some(idx) = lineup.starting.iter().position(|s| s.is_none()) {
        return Err(LineupError::EmptySlot(idx));
    }
    if lineup.bench.len() > BENCH_CAPACITY {
        return Err(LineupError::BenchOverflow(lineup.bench.len()));
    }

    let mut seen = HashSet::new();
    for id in lineup.all_ids() {
        if !seen.insert(id) {
            return Err(LineupError::DuplicatePlayer(id));
        }
    }

    let mut has_keeper = false;
    for id in lineup.starting.iter().flatten() {
        let player = players
            .iter()
            .find(|p| p.id == *id)
            .ok_or(LineupError::UnknownPlayer(*id))?;
        if player.suspension_matches > 0 {
            return Err(LineupError::SuspendedStarter(*id));
        }
        if player.is_severely_injured() {
            return Err(LineupError::InjuredStarter(*id));
        }
        if player.position.is_goalkeeper() {
            has_keeper = true;
        }
    }
    if !has_keeper {
        return Err(LineupError::MissingGoalkeeper);
    }

    Ok(())
}
