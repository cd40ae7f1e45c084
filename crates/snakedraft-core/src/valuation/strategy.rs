// Draft strategies and their per-position weighting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::draft::player::Position;

/// How the user wants to build their roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DraftStrategy {
    #[default]
    Balanced,
    QbHeavy,
    HeroRb,
    ZeroRb,
    HeroWr,
    ZeroWr,
    VbdOnly,
}

pub const ALL_STRATEGIES: [DraftStrategy; 7] = [
    DraftStrategy::Balanced,
    DraftStrategy::QbHeavy,
    DraftStrategy::HeroRb,
    DraftStrategy::ZeroRb,
    DraftStrategy::HeroWr,
    DraftStrategy::ZeroWr,
    DraftStrategy::VbdOnly,
];

impl DraftStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStrategy::Balanced => "balanced",
            DraftStrategy::QbHeavy => "qb-heavy",
            DraftStrategy::HeroRb => "hero-rb",
            DraftStrategy::ZeroRb => "zero-rb",
            DraftStrategy::HeroWr => "hero-wr",
            DraftStrategy::ZeroWr => "zero-wr",
            DraftStrategy::VbdOnly => "vbd-only",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DraftStrategy::Balanced => "weigh value and roster needs evenly",
            DraftStrategy::QbHeavy => "load up on quarterbacks for the superflex",
            DraftStrategy::HeroRb => "anchor one elite RB, then build elsewhere",
            DraftStrategy::ZeroRb => "fade RBs early, pile up WRs",
            DraftStrategy::HeroWr => "anchor one elite WR, then build elsewhere",
            DraftStrategy::ZeroWr => "fade WRs early, pile up RBs",
            DraftStrategy::VbdOnly => "best value available, needs barely count",
        }
    }

    /// Multiplier applied to a candidate's base score at `position`.
    pub fn position_modifier(&self, position: Position) -> f64 {
        use Position::*;
        match (self, position) {
            (DraftStrategy::Balanced | DraftStrategy::VbdOnly, _) => 1.0,
            (DraftStrategy::QbHeavy, Quarterback) => 1.8,
            (DraftStrategy::QbHeavy, _) => 0.9,
            (DraftStrategy::HeroRb, Quarterback) => 0.9,
            (DraftStrategy::HeroRb, RunningBack) => 1.5,
            (DraftStrategy::HeroRb, WideReceiver) => 1.1,
            (DraftStrategy::HeroRb, TightEnd) => 1.0,
            (DraftStrategy::ZeroRb, Quarterback) => 1.1,
            (DraftStrategy::ZeroRb, RunningBack) => 0.4,
            (DraftStrategy::ZeroRb, WideReceiver) => 1.4,
            (DraftStrategy::ZeroRb, TightEnd) => 1.2,
            (DraftStrategy::HeroWr, Quarterback) => 0.9,
            (DraftStrategy::HeroWr, RunningBack) => 1.1,
            (DraftStrategy::HeroWr, WideReceiver) => 1.5,
            (DraftStrategy::HeroWr, TightEnd) => 1.0,
            (DraftStrategy::ZeroWr, Quarterback) => 1.1,
            (DraftStrategy::ZeroWr, RunningBack) => 1.4,
            (DraftStrategy::ZeroWr, WideReceiver) => 0.4,
            (DraftStrategy::ZeroWr, TightEnd) => 1.2,
        }
    }
}

impl fmt::Display for DraftStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown draft strategy `{0}` (expected one of: balanced, qb-heavy, hero-rb, zero-rb, hero-wr, zero-wr, vbd-only)")]
pub struct ParseStrategyError(pub String);

impl FromStr for DraftStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL_STRATEGIES
            .iter()
            .copied()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("balanced".parse::<DraftStrategy>(), Ok(DraftStrategy::Balanced));
        assert_eq!("zero-rb".parse::<DraftStrategy>(), Ok(DraftStrategy::ZeroRb));
        assert_eq!(" VBD-Only ".parse::<DraftStrategy>(), Ok(DraftStrategy::VbdOnly));
        assert!("robust-rb".parse::<DraftStrategy>().is_err());
    }

    #[test]
    fn as_str_roundtrips() {
        for strategy in ALL_STRATEGIES {
            assert_eq!(strategy.as_str().parse::<DraftStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&DraftStrategy::HeroWr).unwrap();
        assert_eq!(json, "\"hero-wr\"");
        let parsed: DraftStrategy = serde_json::from_str("\"qb-heavy\"").unwrap();
        assert_eq!(parsed, DraftStrategy::QbHeavy);
    }

    #[test]
    fn modifier_table() {
        assert_eq!(DraftStrategy::Balanced.position_modifier(Position::TightEnd), 1.0);
        assert_eq!(DraftStrategy::QbHeavy.position_modifier(Position::Quarterback), 1.8);
        assert_eq!(DraftStrategy::QbHeavy.position_modifier(Position::WideReceiver), 0.9);
        assert_eq!(DraftStrategy::ZeroRb.position_modifier(Position::RunningBack), 0.4);
        assert_eq!(DraftStrategy::ZeroRb.position_modifier(Position::WideReceiver), 1.4);
        assert_eq!(DraftStrategy::ZeroWr.position_modifier(Position::TightEnd), 1.2);
        assert_eq!(DraftStrategy::HeroWr.position_modifier(Position::WideReceiver), 1.5);
        assert_eq!(DraftStrategy::VbdOnly.position_modifier(Position::Quarterback), 1.0);
    }

    #[test]
    fn default_is_balanced() {
        assert_eq!(DraftStrategy::default(), DraftStrategy::Balanced);
    }
}
