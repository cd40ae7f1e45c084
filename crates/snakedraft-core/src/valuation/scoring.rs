// Fantasy point scoring rules and the stat-line -> points calculator.

use serde::{Deserialize, Serialize};

use crate::draft::player::{round_tenth, PlayerStats, Position};

// ---------------------------------------------------------------------------
// Scoring settings
// ---------------------------------------------------------------------------

/// Per-category point multipliers and yardage bonuses.
///
/// Every section and field has a default, so a config file only needs to
/// list the values it overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub passing: PassingScoring,
    pub rushing: RushingScoring,
    pub receiving: ReceivingScoring,
    pub misc: MiscScoring,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassingScoring {
    pub yards_per_point: f64,
    pub td_points: f64,
    /// Points per interception (negative).
    pub int_points: f64,
    pub bonus_300: f64,
    pub bonus_400: f64,
}

impl Default for PassingScoring {
    fn default() -> Self {
        PassingScoring {
            yards_per_point: 25.0,
            td_points: 4.0,
            int_points: -2.0,
            bonus_300: 1.5,
            bonus_400: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RushingScoring {
    pub yards_per_point: f64,
    pub td_points: f64,
    pub bonus_100: f64,
    pub bonus_200: f64,
}

impl Default for RushingScoring {
    fn default() -> Self {
        RushingScoring {
            yards_per_point: 10.0,
            td_points: 6.0,
            bonus_100: 2.5,
            bonus_200: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivingScoring {
    /// Base points per reception for every position.
    pub reception_points: f64,
    /// Extra points per reception for wide receivers.
    pub wr_reception_bonus: f64,
    /// Extra points per reception for tight ends.
    pub te_reception_bonus: f64,
    pub yards_per_point: f64,
    pub td_points: f64,
    pub bonus_100: f64,
    pub bonus_200: f64,
}

impl Default for ReceivingScoring {
    fn default() -> Self {
        ReceivingScoring {
            reception_points: 0.5,
            wr_reception_bonus: 0.5,
            te_reception_bonus: 1.0,
            yards_per_point: 10.0,
            td_points: 6.0,
            bonus_100: 2.0,
            bonus_200: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiscScoring {
    pub two_point_conversion: f64,
    /// Points per lost fumble (negative). Applied to rushing fumbles.
    pub fumble_lost: f64,
    pub fumble_recovery_td: f64,
}

impl Default for MiscScoring {
    fn default() -> Self {
        MiscScoring {
            two_point_conversion: 2.0,
            fumble_lost: -2.0,
            fumble_recovery_td: 6.0,
        }
    }
}

impl ReceivingScoring {
    /// Points per reception for `position`, including the WR/TE premium.
    pub fn points_per_reception(&self, position: Position) -> f64 {
        match position {
            Position::WideReceiver => self.reception_points + self.wr_reception_bonus,
            Position::TightEnd => self.reception_points + self.te_reception_bonus,
            Position::Quarterback | Position::RunningBack => self.reception_points,
        }
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// One-time yardage bonus: the higher threshold wins, never both.
fn yardage_bonus(yards: u32, low: (u32, f64), high: (u32, f64)) -> f64 {
    if yards >= high.0 {
        high.1
    } else if yards >= low.0 {
        low.1
    } else {
        0.0
    }
}

/// Total fantasy points for a stat line, rounded to one decimal.
///
/// Categories without a sub-record contribute nothing.
pub fn fantasy_points(stats: &PlayerStats, position: Position, scoring: &ScoringSettings) -> f64 {
    let mut points = 0.0;

    if let Some(passing) = &stats.passing {
        let s = &scoring.passing;
        points += passing.yards as f64 / s.yards_per_point;
        points += passing.touchdowns as f64 * s.td_points;
        points += passing.interceptions as f64 * s.int_points;
        points += yardage_bonus(passing.yards, (300, s.bonus_300), (400, s.bonus_400));
    }

    if let Some(rushing) = &stats.rushing {
        let s = &scoring.rushing;
        points += rushing.yards as f64 / s.yards_per_point;
        points += rushing.touchdowns as f64 * s.td_points;
        points += rushing.fumbles as f64 * scoring.misc.fumble_lost;
        points += yardage_bonus(rushing.yards, (100, s.bonus_100), (200, s.bonus_200));
    }

    if let Some(receiving) = &stats.receiving {
        let s = &scoring.receiving;
        points += receiving.yards as f64 / s.yards_per_point;
        points += receiving.touchdowns as f64 * s.td_points;
        points += receiving.receptions as f64 * s.points_per_reception(position);
        points += yardage_bonus(receiving.yards, (100, s.bonus_100), (200, s.bonus_200));
    }

    round_tenth(points)
}
