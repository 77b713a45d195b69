//! Formation fit scoring.
//!
//! Produces a comparison score, not a probability: callers only ever use it
//! as a sort key when ranking candidates for a slot.

use crate::models::{Player, Position};

/// Offset applied when a goalkeeper is ranked for a field role or a field
/// player for goal. Large enough that any natural candidate wins, while the
/// overall rating still orders equally-mismatched players.
pub const GK_MISMATCH_PENALTY: f32 = -2000.0;

/// Score `player` as a candidate for `role`.
///
/// Matching-role scores are role-specific weighted attribute sums. Ties are
/// broken by iteration order in [`best_fit`] (first-found wins).
pub fn calculate_fit_score(player: &Player, role: Position) -> f32 {
    if player.position.is_goalkeeper() != role.is_goalkeeper() {
        return GK_MISMATCH_PENALTY + player.overall as f32;
    }

    let a = &player.attributes;
    match role {
        Position::GK => 2.0 * a.goalkeeping as f32 + a.positioning as f32,
        Position::DEF => 1.5 * a.defending as f32 + a.strength as f32 + a.positioning as f32,
        Position::MID => 1.2 * a.passing as f32 + a.vision as f32 + a.technique as f32,
        Position::FWD => 1.5 * a.finishing as f32 + a.attacking as f32 + 0.5 * a.pace as f32,
    }
}

/// Best candidate for `role` by fit score. On equal scores the first
/// candidate in iteration order wins.
pub fn best_fit<'a, I>(candidates: I, role: Position) -> Option<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut best: Option<(&'a Player, f32)> = None;
    for player in candidates {
        let score = calculate_fit_score(player, role);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((player, score));
        }
    }
    best.map(|(player, _)| player)
}
