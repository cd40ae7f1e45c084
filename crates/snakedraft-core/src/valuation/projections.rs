// Player pool loading and season point projection.
//
// Reads season stat CSVs (one row per player, category columns prefixed with
// PASSING_/RUSHING_/RECEIVING_) and turns each row into a `Player` with a
// projected point total.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::draft::player::{
    round_tenth, PassingStats, Player, PlayerStats, Position, ReceivingStats, RushingStats,
};
use crate::valuation::scoring::{fantasy_points, ScoringSettings};

/// Games a full season is projected over when a player missed time.
const FULL_SEASON_GAMES: f64 = 16.0;

/// Weight kept on the player's own pace; the rest regresses to the mean.
const OWN_PACE_WEIGHT: f64 = 0.8;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Which season total the projection starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointsSource {
    /// Score the stat line with the configured scoring rules.
    #[default]
    Calculated,
    /// Use the total points column as reported in the data file.
    Reported,
}

#[derive(Debug, thiserror::Error)]
pub enum PlayerDataError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// League-average season points used as the regression target.
pub fn positional_mean(position: Position) -> f64 {
    match position {
        Position::Quarterback => 250.0,
        Position::RunningBack => 180.0,
        Position::WideReceiver => 160.0,
        Position::TightEnd => 120.0,
    }
}

/// Project next-season points from last season's stat line.
///
/// Partial seasons are scaled to a full season's pace, then the result is
/// shrunk 20% toward the positional mean.
pub fn project_points(
    stats: &PlayerStats,
    position: Position,
    source: PointsSource,
    scoring: &ScoringSettings,
) -> f64 {
    let season_points = match source {
        PointsSource::Calculated => fantasy_points(stats, position, scoring),
        PointsSource::Reported => stats.points,
    };

    let mut projected = season_points;
    if stats.games_played > 0 && stats.games_played < 17 {
        projected = season_points / stats.games_played as f64 * FULL_SEASON_GAMES;
    }

    let shrunk = projected * OWN_PACE_WEIGHT + positional_mean(position) * (1.0 - OWN_PACE_WEIGHT);
    round_tenth(shrunk)
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

/// Accept numbers, numeric strings, or blanks; anything unparseable reads as 0.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()).unwrap_or(0.0))
}

fn lenient_optional<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()))
}

/// Season stats CSV row. Missing columns read as 0; extra columns are ignored.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawStatRow {
    #[serde(default)]
    Name: String,
    #[serde(default)]
    Team: String,
    #[serde(default)]
    POS: String,
    #[serde(default, deserialize_with = "lenient_number")]
    PTS: f64,
    #[serde(default, rename = "PTS/G", deserialize_with = "lenient_number")]
    PTS_PER_GAME: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    GP: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    PASSING_CMP: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    PASSING_ATT: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    PASSING_YDS: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    PASSING_TD: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    PASSING_INT: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    RUSHING_ATT: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    RUSHING_YDS: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    RUSHING_TD: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    RUSHING_FUM: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    RECEIVING_TGT: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    RECEIVING_REC: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    RECEIVING_YDS: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    RECEIVING_TD: f64,
    #[serde(default, deserialize_with = "lenient_optional")]
    ADP: Option<f64>,
}

/// Whole, non-negative count from a CSV cell.
fn count(value: f64) -> u32 {
    value.max(0.0).trunc() as u32
}

impl RawStatRow {
    fn stats(&self) -> PlayerStats {
        let passing = (count(self.PASSING_ATT) > 0).then(|| PassingStats {
            completions: count(self.PASSING_CMP),
            attempts: count(self.PASSING_ATT),
            yards: count(self.PASSING_YDS),
            touchdowns: count(self.PASSING_TD),
            interceptions: count(self.PASSING_INT),
        });
        let rushing = (count(self.RUSHING_ATT) > 0).then(|| RushingStats {
            attempts: count(self.RUSHING_ATT),
            yards: count(self.RUSHING_YDS),
            touchdowns: count(self.RUSHING_TD),
            fumbles: count(self.RUSHING_FUM),
        });
        let receiving = (count(self.RECEIVING_TGT) > 0).then(|| ReceivingStats {
            targets: count(self.RECEIVING_TGT),
            receptions: count(self.RECEIVING_REC),
            yards: count(self.RECEIVING_YDS),
            touchdowns: count(self.RECEIVING_TD),
        });

        PlayerStats {
            games_played: count(self.GP),
            points: self.PTS,
            points_per_game: self.PTS_PER_GAME,
            passing,
            rushing,
            receiving,
        }
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

fn load_players_from_reader<R: Read>(
    rdr: R,
    source: PointsSource,
    scoring: &ScoringSettings,
) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();

    for result in reader.deserialize::<RawStatRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };

        let name = raw.Name.trim();
        if name.is_empty() {
            continue;
        }
        let Some(position) = Position::from_str_pos(&raw.POS) else {
            warn!("skipping '{}': unsupported position '{}'", name, raw.POS.trim());
            continue;
        };

        let stats = raw.stats();
        let projected = project_points(&stats, position, source, scoring);
        let mut player = Player::new(
            format!("player-{}", players.len()),
            name,
            raw.Team.trim(),
            position,
            stats,
            projected,
        );
        player.adp = raw.ADP;
        players.push(player);
    }

    Ok(players)
}

/// Load the player pool from a season stats CSV file.
pub fn load_players(
    path: &Path,
    source: PointsSource,
    scoring: &ScoringSettings,
) -> Result<Vec<Player>, PlayerDataError> {
    let file = std::fs::File::open(path).map_err(|e| PlayerDataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_players_from_reader(file, source, scoring).map_err(|e| {
        PlayerDataError::Csv {
            path: path.display().to_string(),
            source: e,
        }
    })?;

    if players.is_empty() {
        return Err(PlayerDataError::Validation(format!(
            "{} produced zero valid players",
            path.display()
        )));
    }

    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
