// Player records, positions, and season stat lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Football positions that can be drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
}

/// Every draftable position, in display order.
pub const ALL_POSITIONS: [Position; 4] = [
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
];

impl Position {
    /// Parse a position abbreviation ("QB", "rb", ...). Case-insensitive.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
        }
    }

    /// Whether this position can fill a FLEX (RB/WR/TE) slot.
    pub fn is_flex_eligible(&self) -> bool {
        !matches!(self, Position::Quarterback)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position `{0}` (expected QB, RB, WR or TE)")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_str_pos(s).ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Season stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassingStats {
    pub completions: u32,
    pub attempts: u32,
    pub yards: u32,
    pub touchdowns: u32,
    pub interceptions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RushingStats {
    pub attempts: u32,
    pub yards: u32,
    pub touchdowns: u32,
    pub fumbles: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceivingStats {
    pub targets: u32,
    pub receptions: u32,
    pub yards: u32,
    pub touchdowns: u32,
}

/// A player's season stat line.
///
/// Category sub-records are only present when the player recorded volume in
/// that category (pass attempts, rush attempts, targets).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub points: f64,
    pub points_per_game: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing: Option<PassingStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rushing: Option<RushingStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving: Option<ReceivingStats>,
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Stable player identifier (e.g. "player-12").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        PlayerId(s)
    }
}

/// Where and by whom a player was drafted.
///
/// Team and pick number always travel together, so a player is either fully
/// drafted or fully available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSlot {
    /// 1-indexed team id.
    pub team_id: u32,
    /// Absolute 1-indexed pick number.
    pub pick_number: u32,
}

/// A draftable player with derived valuation fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub stats: PlayerStats,
    /// Projected season points (derived from `stats`).
    pub projected_points: f64,
    /// Value over the positional baseline (derived, recomputed by the ledger).
    pub vbd_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adp: Option<f64>,
    #[serde(default)]
    pub draft: Option<DraftSlot>,
}

impl Player {
    /// Create an undrafted player with a zero VBD score.
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        team: impl Into<String>,
        position: Position,
        stats: PlayerStats,
        projected_points: f64,
    ) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            team: team.into(),
            position,
            stats,
            projected_points,
            vbd_score: 0.0,
            adp: None,
            draft: None,
        }
    }

    pub fn is_drafted(&self) -> bool {
        self.draft.is_some()
    }

    /// Team that drafted this player, if any.
    pub fn drafted_by(&self) -> Option<u32> {
        self.draft.map(|d| d.team_id)
    }

    /// Pick number this player was taken at, if any.
    pub fn draft_pick(&self) -> Option<u32> {
        self.draft.map(|d| d.pick_number)
    }
}

/// Round to one decimal place, halves rounding up (toward +infinity).
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_pos_standard_positions() {
        assert_eq!(Position::from_str_pos("QB"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos("RB"), Some(Position::RunningBack));
        assert_eq!(Position::from_str_pos("WR"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("TE"), Some(Position::TightEnd));
    }

    #[test]
    fn from_str_pos_case_insensitive_and_trimmed() {
        assert_eq!(Position::from_str_pos("qb"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos(" Te "), Some(Position::TightEnd));
    }

    #[test]
    fn from_str_pos_rejects_non_skill_positions() {
        assert_eq!(Position::from_str_pos("K"), None);
        assert_eq!(Position::from_str_pos("DST"), None);
        assert_eq!(Position::from_str_pos(""), None);
        assert!("FB".parse::<Position>().is_err());
    }

    #[test]
    fn display_str_roundtrip() {
        for pos in ALL_POSITIONS {
            assert_eq!(Position::from_str_pos(pos.display_str()), Some(pos));
        }
    }

    #[test]
    fn flex_eligibility() {
        assert!(!Position::Quarterback.is_flex_eligible());
        assert!(Position::RunningBack.is_flex_eligible());
        assert!(Position::WideReceiver.is_flex_eligible());
        assert!(Position::TightEnd.is_flex_eligible());
    }

    #[test]
    fn new_player_is_undrafted() {
        let p = Player::new("player-0", "Test", "TST", Position::RunningBack, PlayerStats::default(), 100.0);
        assert!(!p.is_drafted());
        assert_eq!(p.drafted_by(), None);
        assert_eq!(p.draft_pick(), None);
        assert_eq!(p.vbd_score, 0.0);
    }

    #[test]
    fn draft_slot_accessors() {
        let mut p = Player::new("player-0", "Test", "TST", Position::RunningBack, PlayerStats::default(), 100.0);
        p.draft = Some(DraftSlot { team_id: 3, pick_number: 14 });
        assert!(p.is_drafted());
        assert_eq!(p.drafted_by(), Some(3));
        assert_eq!(p.draft_pick(), Some(14));
    }

    #[test]
    fn position_serializes_as_abbreviation() {
        let json = serde_json::to_string(&Position::WideReceiver).unwrap();
        assert_eq!(json, "\"WR\"");
        let parsed: Position = serde_json::from_str("\"TE\"").unwrap();
        assert_eq!(parsed, Position::TightEnd);
    }

    #[test]
    fn round_tenth_rounds_halves_up() {
        assert_eq!(round_tenth(12.34), 12.3);
        assert_eq!(round_tenth(12.35), 12.4);
        assert_eq!(round_tenth(-0.25), -0.2);
        assert_eq!(round_tenth(0.0), 0.0);
    }
}
