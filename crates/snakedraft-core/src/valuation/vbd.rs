// Value Based Drafting (VBD).
//
// Scores every player against the replacement level at their position: the
// projected points of the N-th best undrafted player, where N is the number
// of starters the league rosters at that position.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::draft::order::LeagueSize;
use crate::draft::player::{round_tenth, Player, Position, ALL_POSITIONS};

// ---------------------------------------------------------------------------
// Baseline ranks
// ---------------------------------------------------------------------------

/// Baseline rank (1-indexed) per position for a league size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionBaselines {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
}

impl PositionBaselines {
    pub fn rank(&self, position: Position) -> usize {
        match position {
            Position::Quarterback => self.qb,
            Position::RunningBack => self.rb,
            Position::WideReceiver => self.wr,
            Position::TightEnd => self.te,
        }
    }
}

/// Baseline ranks: one QB and TE, two RBs, three WRs per team.
pub fn position_baselines(league_size: LeagueSize) -> PositionBaselines {
    match league_size {
        LeagueSize::Ten => PositionBaselines {
            qb: 10,
            rb: 20,
            wr: 30,
            te: 10,
        },
        LeagueSize::Twelve => PositionBaselines {
            qb: 12,
            rb: 24,
            wr: 36,
            te: 12,
        },
    }
}

// ---------------------------------------------------------------------------
// Baseline values
// ---------------------------------------------------------------------------

/// Projected points of the baseline player at each position.
///
/// Only undrafted players are ranked. A position with fewer undrafted
/// players than its baseline rank has a baseline of 0.
pub fn baseline_points(players: &[Player], league_size: LeagueSize) -> HashMap<Position, f64> {
    let ranks = position_baselines(league_size);
    let mut baselines = HashMap::new();

    for pos in ALL_POSITIONS {
        let mut projections: Vec<f64> = players
            .iter()
            .filter(|p| p.position == pos && !p.is_drafted())
            .map(|p| p.projected_points)
            .collect();
        projections.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        let rank = ranks.rank(pos);
        let value = projections.get(rank.saturating_sub(1)).copied().unwrap_or(0.0);
        baselines.insert(pos, value);
    }

    baselines
}

/// VBD for a single projection against a baseline value.
pub fn vbd_score(projected_points: f64, baseline: f64) -> f64 {
    round_tenth(projected_points - baseline)
}

/// Recompute `vbd_score` for every player in the pool.
///
/// Drafted players are rescored too, against the baseline of the players
/// still available. Running this twice without a pool change is a no-op.
pub fn apply_vbd(players: &mut [Player], league_size: LeagueSize) {
    let baselines = baseline_points(players, league_size);
    let baseline_for = |pos: Position| baselines.get(&pos).copied().unwrap_or(0.0);
    debug!(
        "VBD baselines ({} teams): QB={:.1} RB={:.1} WR={:.1} TE={:.1}",
        league_size,
        baseline_for(Position::Quarterback),
        baseline_for(Position::RunningBack),
        baseline_for(Position::WideReceiver),
        baseline_for(Position::TightEnd),
    );

    for player in players.iter_mut() {
        player.vbd_score = vbd_score(player.projected_points, baseline_for(player.position));
    }
}

/// Fraction of a position's players still undrafted (0 for an empty position).
pub fn position_remaining_ratio(players: &[Player], position: Position) -> f64 {
    let total = players.iter().filter(|p| p.position == position).count();
    if total == 0 {
        return 0.0;
    }
    let available = players
        .iter()
        .filter(|p| p.position == position && !p.is_drafted())
        .count();
    available as f64 / total as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
