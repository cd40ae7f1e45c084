// Roster value report: how much VBD a team has accumulated and where.

use std::fmt;

use serde::Serialize;

use crate::draft::player::{round_tenth, Player, Position, ALL_POSITIONS};

// ---------------------------------------------------------------------------
// Value grade
// ---------------------------------------------------------------------------

/// Letter grade for accumulated draft value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
}

impl ValueGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ValueGrade::APlus,
            s if s >= 85 => ValueGrade::A,
            s if s >= 80 => ValueGrade::AMinus,
            s if s >= 75 => ValueGrade::BPlus,
            s if s >= 70 => ValueGrade::B,
            s if s >= 65 => ValueGrade::BMinus,
            s if s >= 60 => ValueGrade::CPlus,
            s if s >= 55 => ValueGrade::C,
            s if s >= 50 => ValueGrade::CMinus,
            s if s >= 45 => ValueGrade::DPlus,
            s if s >= 40 => ValueGrade::D,
            _ => ValueGrade::F,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValueGrade::APlus => "A+",
            ValueGrade::A => "A",
            ValueGrade::AMinus => "A-",
            ValueGrade::BPlus => "B+",
            ValueGrade::B => "B",
            ValueGrade::BMinus => "B-",
            ValueGrade::CPlus => "C+",
            ValueGrade::C => "C",
            ValueGrade::CMinus => "C-",
            ValueGrade::DPlus => "D+",
            ValueGrade::D => "D",
            ValueGrade::F => "F",
        }
    }
}

impl fmt::Display for ValueGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn total_component(total: f64) -> u32 {
    match total {
        t if t > 600.0 => 40,
        t if t > 500.0 => 35,
        t if t > 400.0 => 30,
        t if t > 300.0 => 25,
        t if t > 200.0 => 20,
        t if t > 100.0 => 15,
        _ => 10,
    }
}

fn average_component(average: f64) -> u32 {
    match average {
        a if a > 60.0 => 30,
        a if a > 50.0 => 25,
        a if a > 40.0 => 20,
        a if a > 30.0 => 15,
        a if a > 20.0 => 10,
        _ => 5,
    }
}

fn top_five_component(top_five: f64) -> u32 {
    match top_five {
        t if t > 350.0 => 30,
        t if t > 300.0 => 25,
        t if t > 250.0 => 20,
        t if t > 200.0 => 15,
        t if t > 150.0 => 10,
        _ => 5,
    }
}

/// Average VBD that counts as a 50-strength position group.
pub fn strength_reference(position: Position) -> f64 {
    match position {
        Position::Quarterback => 30.0,
        Position::RunningBack | Position::WideReceiver => 25.0,
        Position::TightEnd => 20.0,
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionValue {
    pub position: Position,
    pub count: usize,
    pub total_vbd: f64,
    pub average_vbd: f64,
    /// 0-100, 50 means the group averages the position's reference VBD.
    pub strength: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterValueReport<'a> {
    pub total_vbd: f64,
    pub average_vbd: f64,
    /// Sum of the five highest VBD scores.
    pub top_five_vbd: f64,
    /// QB, RB, WR, TE order.
    pub by_position: Vec<PositionValue>,
    pub best_value: Option<&'a Player>,
    pub worst_value: Option<&'a Player>,
    /// `None` for an empty roster.
    pub score: Option<u32>,
    pub grade: Option<ValueGrade>,
}

fn by_vbd_desc(a: &&Player, b: &&Player) -> std::cmp::Ordering {
    b.vbd_score
        .partial_cmp(&a.vbd_score)
        .unwrap_or(std::cmp::Ordering::Equal)
}

/// Summarize the VBD a roster has accumulated.
pub fn roster_value_report<'a>(roster: &[&'a Player]) -> RosterValueReport<'a> {
    let mut ranked: Vec<&'a Player> = roster.to_vec();
    ranked.sort_by(by_vbd_desc);

    let total_vbd: f64 = ranked.iter().map(|p| p.vbd_score).sum();
    let average_vbd = if ranked.is_empty() {
        0.0
    } else {
        total_vbd / ranked.len() as f64
    };
    let top_five_vbd: f64 = ranked.iter().take(5).map(|p| p.vbd_score).sum();

    let by_position = ALL_POSITIONS
        .iter()
        .map(|&pos| {
            let group: Vec<&Player> = ranked.iter().copied().filter(|p| p.position == pos).collect();
            let total: f64 = group.iter().map(|p| p.vbd_score).sum();
            let average = if group.is_empty() {
                0.0
            } else {
                total / group.len() as f64
            };
            PositionValue {
                position: pos,
                count: group.len(),
                total_vbd: round_tenth(total),
                average_vbd: round_tenth(average),
                strength: (average / strength_reference(pos) * 50.0).clamp(0.0, 100.0),
            }
        })
        .collect();

    let score = (!ranked.is_empty()).then(|| {
        total_component(total_vbd) + average_component(average_vbd) + top_five_component(top_five_vbd)
    });

    RosterValueReport {
        total_vbd: round_tenth(total_vbd),
        average_vbd: round_tenth(average_vbd),
        top_five_vbd: round_tenth(top_five_vbd),
        by_position,
        best_value: ranked.first().copied(),
        worst_value: ranked.last().copied(),
        score,
        grade: score.map(ValueGrade::from_score),
    }
}
