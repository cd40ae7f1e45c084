// Pick recommendation engine.
//
// Blends each available player's VBD with the user's roster needs, the
// chosen draft strategy, positional scarcity and tier drop-offs into one
// composite score, then explains the top picks in a short phrase.

use serde::Serialize;
use tracing::debug;

use crate::draft::order::{DraftOrder, LeagueSize};
use crate::draft::player::{Player, PlayerId, Position};
use crate::valuation::needs::{analyze_team_needs, NeedPriority};
use crate::valuation::scarcity::{scarcity_level, tier_bonus};
use crate::valuation::strategy::DraftStrategy;

/// Number of players returned by [`recommend`].
pub const RECOMMENDATION_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Every factor that went into a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub round: u32,
    pub vbd_weight: f64,
    pub needs_weight: f64,
    /// `vbd * vbd_weight`.
    pub base: f64,
    pub strategy_modifier: f64,
    pub need_multiplier: f64,
    /// Scarcity level 0-3 at the player's position.
    pub scarcity: u8,
    pub scarcity_bonus: f64,
    pub tier_bonus: f64,
    /// Round- and roster-dependent strategy multiplier (1.0 when none applies).
    pub strategy_adjustment: f64,
}

/// A scored candidate with its explanation.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRecommendation<'a> {
    pub player: &'a Player,
    pub score: f64,
    pub reason: String,
    /// Roster need at the player's position; `None` when there is no entry.
    pub need_level: Option<NeedPriority>,
    pub breakdown: ScoreBreakdown,
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Share of the score driven by roster needs in `round`.
///
/// Grows 0.05 per round from 0.2 and caps at 0.5; fixed at 0.1 for
/// `vbd-only`.
pub fn needs_weight(round: u32, strategy: DraftStrategy) -> f64 {
    if strategy == DraftStrategy::VbdOnly {
        return 0.1;
    }
    (0.2 + (round as f64 - 1.0) * 0.05).min(0.5)
}

/// Multiplier for a need level. `vbd-only` flattens the spread.
pub fn need_multiplier(need: Option<NeedPriority>, strategy: DraftStrategy) -> f64 {
    let vbd_only = strategy == DraftStrategy::VbdOnly;
    match need {
        Some(NeedPriority::Critical) => {
            if vbd_only {
                1.2
            } else {
                2.0
            }
        }
        Some(NeedPriority::High) => {
            if vbd_only {
                1.1
            } else {
                1.5
            }
        }
        Some(NeedPriority::Medium) => {
            if vbd_only {
                1.05
            } else {
                1.2
            }
        }
        Some(NeedPriority::Low) => 1.0,
        None => {
            if vbd_only {
                0.95
            } else {
                0.8
            }
        }
    }
}

fn scarcity_weight(strategy: DraftStrategy) -> f64 {
    if strategy == DraftStrategy::VbdOnly {
        5.0
    } else {
        10.0
    }
}

/// Late multiplier for strategies that care about round or roster shape.
fn strategy_adjustment(
    player: &Player,
    roster: &[&Player],
    round: u32,
    strategy: DraftStrategy,
) -> f64 {
    let rostered = |pos: Position| roster.iter().filter(|p| p.position == pos).count();

    match (strategy, player.position) {
        (DraftStrategy::QbHeavy, Position::Quarterback) => {
            if rostered(Position::Quarterback) < 2 && round <= 6 {
                1.3
            } else {
                1.0
            }
        }
        (DraftStrategy::HeroRb, Position::RunningBack) => {
            let rbs = rostered(Position::RunningBack);
            if rbs == 0 && player.vbd_score > 60.0 {
                1.4
            } else if rbs >= 1 {
                0.7
            } else {
                1.0
            }
        }
        (DraftStrategy::HeroWr, Position::WideReceiver) => {
            let wrs = rostered(Position::WideReceiver);
            if wrs == 0 && player.vbd_score > 60.0 {
                1.4
            } else if wrs >= 1 {
                0.8
            } else {
                1.0
            }
        }
        (DraftStrategy::ZeroRb, Position::RunningBack)
        | (DraftStrategy::ZeroWr, Position::WideReceiver) => {
            if round <= 6 {
                0.5
            } else {
                1.3
            }
        }
        _ => 1.0,
    }
}

// ---------------------------------------------------------------------------
// Reason text
// ---------------------------------------------------------------------------

const MAX_REASON_FRAGMENTS: usize = 2;

fn reason_for(
    player: &Player,
    need: Option<NeedPriority>,
    breakdown: &ScoreBreakdown,
    strategy: DraftStrategy,
) -> String {
    let vbd = player.vbd_score;
    let mut fragments: Vec<String> = Vec::new();

    if vbd > 80.0 {
        fragments.push("Elite value".into());
    } else if vbd > 60.0 {
        fragments.push("Great value".into());
    } else if vbd > 40.0 {
        fragments.push("Good value".into());
    }

    if breakdown.strategy_modifier > 1.3 {
        fragments.push("fits strategy perfectly".into());
    } else if breakdown.strategy_modifier < 0.7 && vbd > 60.0 {
        fragments.push("too good to pass".into());
    }

    match need {
        Some(NeedPriority::Critical) => fragments.push("fills critical need".into()),
        Some(NeedPriority::High) if strategy != DraftStrategy::VbdOnly => {
            fragments.push("fills high need".into())
        }
        _ => {}
    }

    if breakdown.scarcity >= 2 {
        fragments.push(format!("scarce {} talent", player.position));
    }

    if breakdown.tier_bonus >= 15.0 {
        fragments.push("major tier drop after".into());
    } else if breakdown.tier_bonus >= 10.0 {
        fragments.push("tier drop after".into());
    }

    let round = breakdown.round;
    match strategy {
        DraftStrategy::QbHeavy if player.position == Position::Quarterback && round <= 6 => {
            fragments.push("QB-heavy strategy pick".into())
        }
        DraftStrategy::HeroRb if player.position == Position::RunningBack && vbd > 60.0 => {
            fragments.push("anchor RB for hero strategy".into())
        }
        DraftStrategy::ZeroRb if player.position != Position::RunningBack && round <= 6 => {
            fragments.push("zero-RB target".into())
        }
        _ => {}
    }

    fragments.dedup();
    if fragments.is_empty() {
        return "Solid pick at current value".to_string();
    }
    fragments.truncate(MAX_REASON_FRAGMENTS);
    fragments.join(", ")
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score every available player, highest composite score first.
///
/// Ties keep the order of `available`.
pub fn score_candidates<'a>(
    available: &[&'a Player],
    roster: &[&Player],
    current_pick: u32,
    league_size: LeagueSize,
    strategy: DraftStrategy,
) -> Vec<PlayerRecommendation<'a>> {
    let needs = analyze_team_needs(roster);
    let round = DraftOrder::standard(league_size).round_of(current_pick);
    let needs_weight = needs_weight(round, strategy);
    let vbd_weight = 1.0 - needs_weight;

    let mut scored: Vec<PlayerRecommendation<'a>> = available
        .iter()
        .map(|&player| {
            let need = needs.priority_for(player.position);

            let base = player.vbd_score * vbd_weight;
            let strategy_modifier = strategy.position_modifier(player.position);
            let need_multiplier = need_multiplier(need, strategy);
            let scarcity = scarcity_level(available, player.position);
            let scarcity_bonus = scarcity as f64 * scarcity_weight(strategy);
            let tier_bonus = tier_bonus(player, available);
            let adjustment = strategy_adjustment(player, roster, round, strategy);

            let mut score = base * strategy_modifier;
            score *= need_multiplier * needs_weight + vbd_weight;
            score += scarcity_bonus;
            score += tier_bonus;
            score *= adjustment;

            let breakdown = ScoreBreakdown {
                round,
                vbd_weight,
                needs_weight,
                base,
                strategy_modifier,
                need_multiplier,
                scarcity,
                scarcity_bonus,
                tier_bonus,
                strategy_adjustment: adjustment,
            };

            PlayerRecommendation {
                player,
                score,
                reason: reason_for(player, need, &breakdown, strategy),
                need_level: need,
                breakdown,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

/// Top three picks for the user's next selection.
pub fn recommend<'a>(
    available: &[&'a Player],
    roster: &[&Player],
    current_pick: u32,
    league_size: LeagueSize,
    strategy: DraftStrategy,
) -> Vec<PlayerRecommendation<'a>> {
    let mut recs = score_candidates(available, roster, current_pick, league_size, strategy);
    recs.truncate(RECOMMENDATION_COUNT);

    if let Some(top) = recs.first() {
        debug!(
            "pick {} ({}): top recommendation {} ({}) score {:.1}",
            current_pick, strategy, top.player.name, top.player.position, top.score
        );
    }
    recs
}

/// The single best pick, if any player is available.
pub fn top_recommendation<'a>(
    available: &[&'a Player],
    roster: &[&Player],
    current_pick: u32,
    league_size: LeagueSize,
    strategy: DraftStrategy,
) -> Option<&'a Player> {
    recommend(available, roster, current_pick, league_size, strategy)
        .first()
        .map(|rec| rec.player)
}

/// Whether `player_id` is among the current top recommendations.
pub fn is_recommended(
    player_id: &PlayerId,
    available: &[&Player],
    roster: &[&Player],
    current_pick: u32,
    league_size: LeagueSize,
    strategy: DraftStrategy,
) -> bool {
    recommend(available, roster, current_pick, league_size, strategy)
        .iter()
        .any(|rec| rec.player.id == *player_id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
