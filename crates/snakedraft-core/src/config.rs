// Configuration loading and parsing (draft.toml).

use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::draft::order::{LeagueSize, DEFAULT_ROUNDS};
use crate::valuation::projections::PointsSource;
use crate::valuation::scoring::ScoringSettings;
use crate::valuation::strategy::DraftStrategy;

/// Default draft.toml written when no `defaults/` directory is available.
const BUILTIN_DRAFT_TOML: &str = include_str!("../../../defaults/draft.toml");

const CONFIG_FILE: &str = "draft.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub strategy: DraftStrategy,
    pub points_source: PointsSource,
    pub scoring: ScoringSettings,
    pub data_paths: DataPaths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueConfig {
    pub size: LeagueSize,
    /// The user's draft slot, 1-indexed.
    pub user_team: u32,
    pub rounds: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players: String,
}

impl Config {
    /// Players CSV path; relative paths resolve against `base_dir`.
    pub fn players_path(&self, base_dir: &Path) -> PathBuf {
        let path = Path::new(&self.data_paths.players);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire draft.toml file.
#[derive(Debug, Clone, Deserialize)]
struct DraftFile {
    league: LeagueSection,
    #[serde(default)]
    draft: DraftSection,
    #[serde(default)]
    projection: ProjectionSection,
    #[serde(default)]
    scoring: ScoringSettings,
    data_paths: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
struct LeagueSection {
    size: u32,
    #[serde(default = "default_user_team")]
    user_team: u32,
    #[serde(default = "default_rounds")]
    rounds: u32,
}

fn default_user_team() -> u32 {
    1
}

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

#[derive(Debug, Clone, Deserialize)]
struct DraftSection {
    strategy: String,
}

impl Default for DraftSection {
    fn default() -> Self {
        DraftSection {
            strategy: DraftStrategy::default().as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProjectionSection {
    #[serde(default)]
    points_source: PointsSource,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/draft.toml` relative to `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    parse_config(&text, &path)
}

fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let file: DraftFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&file)?;

    let size = LeagueSize::try_from(file.league.size).map_err(|e| ConfigError::ValidationError {
        field: "league.size".into(),
        message: e.to_string(),
    })?;
    let strategy = file
        .draft
        .strategy
        .parse::<DraftStrategy>()
        .map_err(|e| ConfigError::ValidationError {
            field: "draft.strategy".into(),
            message: e.to_string(),
        })?;

    Ok(Config {
        league: LeagueConfig {
            size,
            user_team: file.league.user_team,
            rounds: file.league.rounds,
        },
        strategy,
        points_source: file.projection.points_source,
        scoring: file.scoring,
        data_paths: file.data_paths,
    })
}

/// Seed `config/` with every file under `defaults/` that it lacks.
///
/// Files already in `config/` are left alone, as are `*.example` templates.
/// Returns the paths created.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.is_dir() {
        return if config_dir.is_dir() {
            Ok(Vec::new())
        } else {
            Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "{} has no config/ or defaults/; pass --config-dir or run from the project root",
                    base_dir.display()
                ),
            })
        };
    }

    fs::create_dir_all(&config_dir).map_err(|e| seed_error("create", &config_dir, e))?;

    let mut seeded = Vec::new();
    for source in default_files(&defaults_dir)? {
        let Some(name) = source.file_name() else {
            continue;
        };
        let content = fs::read(&source).map_err(|e| seed_error("read", &source, e))?;
        if let Some(target) = seed_file(&config_dir.join(name), &content)? {
            seeded.push(target);
        }
    }
    Ok(seeded)
}

/// Regular files under `dir`, minus `*.example`, in name order.
fn default_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let entries = fs::read_dir(dir).map_err(|e| seed_error("list", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| seed_error("list", dir, e))?.path();
        let is_example = path.extension().is_some_and(|ext| ext == "example");
        if path.is_file() && !is_example {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Write `config/draft.toml` from the compiled-in copy when it is missing.
fn install_builtin_config(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let config_dir = base_dir.join("config");
    fs::create_dir_all(&config_dir).map_err(|e| seed_error("create", &config_dir, e))?;

    let seeded = seed_file(&config_dir.join(CONFIG_FILE), BUILTIN_DRAFT_TOML.as_bytes())?;
    Ok(seeded.into_iter().collect())
}

/// Create `target` holding `content`; `None` if something is already there.
fn seed_file(target: &Path, content: &[u8]) -> Result<Option<PathBuf>, ConfigError> {
    let mut file = match fs::File::create_new(target) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(None),
        Err(e) => return Err(seed_error("create", target, e)),
    };
    file.write_all(content).map_err(|e| seed_error("write", target, e))?;
    Ok(Some(target.to_path_buf()))
}

fn seed_error(action: &str, path: &Path, err: io::Error) -> ConfigError {
    ConfigError::DefaultsCopyError {
        message: format!("cannot {} {}: {}", action, path.display(), err),
    }
}

/// Pick the directory that holds `config/` and `defaults/`.
///
/// An explicit directory always wins. Otherwise the current directory is
/// used when it looks like a project root, and the platform config
/// directory when it does not.
pub fn resolve_base_dir(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    if cwd.join("config").exists() || cwd.join("defaults").exists() {
        return Ok(cwd);
    }

    match directories::ProjectDirs::from("", "", "snakedraft") {
        Some(dirs) => Ok(dirs.config_dir().to_path_buf()),
        None => Ok(cwd),
    }
}

/// Resolve the base directory, make sure a config exists there, and load it.
///
/// Returns the config together with the base directory it came from.
pub fn load_config(explicit_dir: Option<&Path>) -> Result<(Config, PathBuf), ConfigError> {
    let base_dir = resolve_base_dir(explicit_dir)?;

    let copied = if base_dir.join("defaults").exists() || base_dir.join("config").exists() {
        ensure_config_files(&base_dir)?
    } else {
        install_builtin_config(&base_dir)?
    };
    for path in &copied {
        info!("Initialized {} from defaults", path.display());
    }

    let config = load_config_from(&base_dir)?;
    Ok((config, base_dir))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(file: &DraftFile) -> Result<(), ConfigError> {
    let league = &file.league;
    if league.size != 10 && league.size != 12 {
        return Err(ConfigError::ValidationError {
            field: "league.size".into(),
            message: format!("must be 10 or 12, got {}", league.size),
        });
    }

    if league.user_team == 0 || league.user_team > league.size {
        return Err(ConfigError::ValidationError {
            field: "league.user_team".into(),
            message: format!("must be between 1 and {}, got {}", league.size, league.user_team),
        });
    }

    if league.rounds == 0 {
        return Err(ConfigError::ValidationError {
            field: "league.rounds".into(),
            message: "must be greater than 0".into(),
        });
    }

    let s = &file.scoring;
    let yardage_fields: &[(&str, f64)] = &[
        ("scoring.passing.yards_per_point", s.passing.yards_per_point),
        ("scoring.rushing.yards_per_point", s.rushing.yards_per_point),
        ("scoring.receiving.yards_per_point", s.receiving.yards_per_point),
    ];
    for (name, val) in yardage_fields {
        if *val <= 0.0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be > 0, got {val}"),
            });
        }
    }

    if file.data_paths.players.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data_paths.players".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
