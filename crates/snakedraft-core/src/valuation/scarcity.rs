// Positional scarcity and tier drop-off among available players.
//
// Scarcity counts how many high-tier players remain at a position; the tier
// bonus measures how far value falls after a given player.

use crate::draft::player::{Player, Position};

// ---------------------------------------------------------------------------
// Tier thresholds
// ---------------------------------------------------------------------------

/// VBD cut lines for tiers 1-4 at a position.
pub fn tier_thresholds(position: Position) -> [f64; 4] {
    match position {
        Position::Quarterback => [80.0, 60.0, 40.0, 20.0],
        Position::RunningBack | Position::WideReceiver => [70.0, 50.0, 35.0, 20.0],
        Position::TightEnd => [50.0, 35.0, 20.0, 10.0],
    }
}

// ---------------------------------------------------------------------------
// Scarcity level
// ---------------------------------------------------------------------------

/// Scarcity level 0-3 for a position; higher means fewer quality players.
///
/// - no available player above tier 1 -> 3
/// - one or two above tier 1 -> 2
/// - at most five above tier 2 -> 1
/// - otherwise 0
pub fn scarcity_level(available: &[&Player], position: Position) -> u8 {
    let tiers = tier_thresholds(position);
    let at_position = || available.iter().filter(move |p| p.position == position);

    let top_tier = at_position().filter(|p| p.vbd_score > tiers[0]).count();
    let second_tier = at_position().filter(|p| p.vbd_score > tiers[1]).count();

    if top_tier == 0 {
        3
    } else if top_tier <= 2 {
        2
    } else if second_tier <= 5 {
        1
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Tier drop
// ---------------------------------------------------------------------------

/// Bonus for taking `player` before a drop-off at their position.
///
/// Compares against the best other available player at the same position:
/// nobody left -> 20, drop > 20 -> 15, > 15 -> 10, > 10 -> 5, else 0.
pub fn tier_bonus(player: &Player, available: &[&Player]) -> f64 {
    let next_best = available
        .iter()
        .filter(|p| p.position == player.position && p.id != player.id)
        .map(|p| p.vbd_score)
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let Some(next_best) = next_best else {
        return 20.0;
    };

    let drop = player.vbd_score - next_best;
    if drop > 20.0 {
        15.0
    } else if drop > 15.0 {
        10.0
    } else if drop > 10.0 {
        5.0
    } else {
        0.0
    }
}
