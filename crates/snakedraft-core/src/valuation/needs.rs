// Team needs analysis.
//
// Slots a roster into the starting lineup template, rates how badly each
// position needs another player, and grades overall roster construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::draft::lineup::{dedicated_starters, Lineup};
use crate::draft::player::{Player, Position, ALL_POSITIONS};

// ---------------------------------------------------------------------------
// Need priority
// ---------------------------------------------------------------------------

/// How urgently a position should be addressed. Ordered most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl NeedPriority {
    pub fn label(&self) -> &'static str {
        match self {
            NeedPriority::Critical => "critical",
            NeedPriority::High => "high",
            NeedPriority::Medium => "medium",
            NeedPriority::Low => "low",
        }
    }
}

impl fmt::Display for NeedPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Total players wanted at a position, starters plus depth.
pub fn ideal_depth(position: Position) -> usize {
    match position {
        Position::Quarterback => 3,
        Position::RunningBack | Position::WideReceiver => 6,
        Position::TightEnd => 2,
    }
}

fn priority_for(position: Position, filled: usize) -> NeedPriority {
    match position {
        // A second QB has superflex value, so QB needs stay high longer.
        Position::Quarterback => match filled {
            0 => NeedPriority::Critical,
            1 => NeedPriority::High,
            2 => NeedPriority::Medium,
            _ => NeedPriority::Low,
        },
        _ => {
            let starters = dedicated_starters(position);
            if filled < starters {
                NeedPriority::Critical
            } else if filled == starters {
                NeedPriority::High
            } else if filled < ideal_depth(position) {
                NeedPriority::Medium
            } else {
                NeedPriority::Low
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// Need assessment for one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionNeed {
    pub position: Position,
    /// Players rostered at the position.
    pub filled: usize,
    /// Dedicated starters at the position.
    pub required: usize,
    /// Players still wanted to reach ideal depth.
    pub depth: usize,
    pub priority: NeedPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamGrade {
    A,
    B,
    C,
    D,
    F,
}

impl TeamGrade {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 90 => TeamGrade::A,
            s if s >= 80 => TeamGrade::B,
            s if s >= 70 => TeamGrade::C,
            s if s >= 60 => TeamGrade::D,
            _ => TeamGrade::F,
        }
    }
}

impl fmt::Display for TeamGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamGrade::A => "A",
            TeamGrade::B => "B",
            TeamGrade::C => "C",
            TeamGrade::D => "D",
            TeamGrade::F => "F",
        };
        f.write_str(s)
    }
}

/// Full needs analysis for a roster.
#[derive(Debug, Clone, Serialize)]
pub struct TeamNeedsAnalysis<'a> {
    /// Sorted most urgent first; QB, RB, WR, TE order within a priority.
    pub position_needs: Vec<PositionNeed>,
    /// At most three short directives.
    pub recommendations: Vec<String>,
    pub grade: TeamGrade,
    /// Roster construction score, 0-100.
    pub score: i32,
    pub lineup: Lineup<'a>,
}

impl TeamNeedsAnalysis<'_> {
    /// Need entry for `position`.
    pub fn need_for(&self, position: Position) -> Option<&PositionNeed> {
        self.position_needs.iter().find(|n| n.position == position)
    }

    pub fn priority_for(&self, position: Position) -> Option<NeedPriority> {
        self.need_for(position).map(|n| n.priority)
    }
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

const MAX_RECOMMENDATIONS: usize = 3;

fn count_at(roster: &[&Player], position: Position) -> usize {
    roster.iter().filter(|p| p.position == position).count()
}

/// Analyze a roster's positional needs and construction grade.
pub fn analyze_team_needs<'a>(roster: &[&'a Player]) -> TeamNeedsAnalysis<'a> {
    let lineup = Lineup::fill(roster);

    let mut position_needs: Vec<PositionNeed> = ALL_POSITIONS
        .iter()
        .map(|&pos| {
            let filled = count_at(roster, pos);
            PositionNeed {
                position: pos,
                filled,
                required: dedicated_starters(pos),
                depth: ideal_depth(pos).saturating_sub(filled),
                priority: priority_for(pos, filled),
            }
        })
        .collect();
    position_needs.sort_by_key(|n| n.priority);

    let score = roster_score(&position_needs, roster, lineup.unfilled());
    let recommendations = need_directives(&position_needs, roster, lineup.unfilled());

    TeamNeedsAnalysis {
        position_needs,
        recommendations,
        grade: TeamGrade::from_score(score),
        score,
        lineup,
    }
}

fn roster_score(needs: &[PositionNeed], roster: &[&Player], unfilled: usize) -> i32 {
    let critical = needs.iter().filter(|n| n.priority == NeedPriority::Critical).count() as i32;
    let high = needs.iter().filter(|n| n.priority == NeedPriority::High).count() as i32;

    let mut score = 100 - 10 * unfilled as i32 - 20 * critical - 10 * high;

    if count_at(roster, Position::Quarterback) >= 2 {
        score += 10;
    }
    if count_at(roster, Position::RunningBack) >= 3
        && count_at(roster, Position::WideReceiver) >= 3
        && roster.len() >= 8
    {
        score += 5;
    }

    score.clamp(0, 100)
}

fn join_positions(needs: &[&PositionNeed]) -> String {
    needs
        .iter()
        .map(|n| n.position.display_str())
        .collect::<Vec<_>>()
        .join("/")
}

fn need_directives(needs: &[PositionNeed], roster: &[&Player], unfilled: usize) -> Vec<String> {
    let mut out = Vec::new();

    if unfilled > 0 {
        out.push(format!("Need {} more starters", unfilled));
    }

    let critical: Vec<&PositionNeed> = needs
        .iter()
        .filter(|n| n.priority == NeedPriority::Critical)
        .collect();
    if !critical.is_empty() {
        out.push(format!("URGENT: Draft {} for starters", join_positions(&critical)));
    }

    match count_at(roster, Position::Quarterback) {
        0 => out.push("CRITICAL: No QB - draft immediately!".to_string()),
        1 => out.push("Target QB for superflex advantage".to_string()),
        _ => {}
    }

    let rbs = count_at(roster, Position::RunningBack);
    let wrs = count_at(roster, Position::WideReceiver);
    if rbs >= 2 && wrs >= 2 && (rbs - 2) + (wrs - 2) < 3 {
        out.push("Need RB/WR depth for flex spots".to_string());
    }

    let high: Vec<&PositionNeed> = needs
        .iter()
        .filter(|n| n.priority == NeedPriority::High)
        .collect();
    if !high.is_empty() && critical.is_empty() {
        out.push(format!("Target {} for depth", join_positions(&high)));
    }

    if unfilled == 0 && critical.is_empty() {
        out.push("Core roster set - consider BPA".to_string());
    }

    out.truncate(MAX_RECOMMENDATIONS);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
