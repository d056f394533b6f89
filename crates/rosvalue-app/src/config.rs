// Configuration loading and parsing (config/rosvalue.toml).

use chrono::Datelike;
use rosvalue_baseball::ValuationSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Config file name, both under `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "rosvalue.toml";

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
// rosvalue.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sources: SourcesConfig,
    pub league: LeagueConfig,
    pub output: OutputConfig,
}

/// Where each data supply reads from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    pub standings_url: String,
    pub league_ids: String,
    /// Standings season. Defaults to the current calendar year.
    #[serde(default)]
    pub season: Option<i32>,
    pub projections_url: String,
    pub positions_path: String,
    pub request_timeout_secs: u64,
}

impl SourcesConfig {
    pub fn season_or_current(&self) -> i32 {
        self.season.unwrap_or_else(|| chrono::Local::now().year())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub teams: usize,
    pub replacement_sample: usize,
}

impl LeagueConfig {
    pub fn valuation_settings(&self) -> ValuationSettings {
        ValuationSettings {
            league_teams: self.teams,
            replacement_sample: self.replacement_sample,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub metrics_path: String,
    pub replacement_pool_path: String,
    #[serde(default = "default_summary_rows")]
    pub summary_rows: usize,
}

fn default_summary_rows() -> usize {
    15
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/rosvalue.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config_in()` does.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Seed `config/` from `defaults/`: every default file without a counterpart
/// in `config/` is copied over. Existing files are never touched and
/// `*.example` templates are skipped. Returns the paths written.
///
/// A base directory with `config/` but no `defaults/` is accepted as-is.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    match (defaults_dir.is_dir(), config_dir.is_dir()) {
        (false, true) => return Ok(Vec::new()),
        (false, false) => {
            return Err(seed_error(format!(
                "no defaults/ or config/ under {}",
                base_dir.display()
            )))
        }
        (true, _) => {}
    }

    std::fs::create_dir_all(&config_dir)
        .map_err(|e| seed_error(format!("cannot create {}: {e}", config_dir.display())))?;

    let mut sources = Vec::new();
    for entry in std::fs::read_dir(&defaults_dir)
        .map_err(|e| seed_error(format!("cannot list {}: {e}", defaults_dir.display())))?
    {
        let path = entry.map_err(|e| seed_error(e.to_string()))?.path();
        let is_template = path.extension().is_some_and(|ext| ext == "example");
        if path.is_file() && !is_template {
            sources.push(path);
        }
    }
    sources.sort();

    let mut written = Vec::new();
    for source in sources {
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = config_dir.join(name);
        if seed_file(&source, &target)? {
            info!("created {} from defaults", target.display());
            written.push(target);
        }
    }
    Ok(written)
}

/// Copy `source` to `target` unless `target` already exists. The target is
/// opened with `create_new` so an existing file is never overwritten.
fn seed_file(source: &Path, target: &Path) -> Result<bool, ConfigError> {
    let mut dest = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(seed_error(format!("cannot create {}: {e}", target.display()))),
    };
    let mut src = std::fs::File::open(source)
        .map_err(|e| seed_error(format!("cannot read {}: {e}", source.display())))?;
    std::io::copy(&mut src, &mut dest)
        .map_err(|e| seed_error(format!("cannot write {}: {e}", target.display())))?;
    Ok(true)
}

fn seed_error(message: String) -> ConfigError {
    ConfigError::DefaultsCopyError { message }
}

/// Copy missing defaults, then load the config under `base_dir`.
pub fn load_config_in(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_files(base_dir)?;
    load_config_from(base_dir)
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

fn validate(config: &Config) -> Result<(), ConfigError> {
    let sources = &config.sources;
    let required_text: &[(&str, &str)] = &[
        ("sources.standings_url", sources.standings_url.as_str()),
        ("sources.league_ids", sources.league_ids.as_str()),
        ("sources.projections_url", sources.projections_url.as_str()),
        ("sources.positions_path", sources.positions_path.as_str()),
        ("output.metrics_path", config.output.metrics_path.as_str()),
        ("output.replacement_pool_path", config.output.replacement_pool_path.as_str()),
    ];
    for (name, val) in required_text {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    if sources.request_timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "sources.request_timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    if let Some(season) = sources.season {
        if !(1876..=2100).contains(&season) {
            return Err(ConfigError::ValidationError {
                field: "sources.season".into(),
                message: format!("must be a plausible season year, got {season}"),
            });
        }
    }

    let league_fields: &[(&str, usize)] = &[
        ("league.teams", config.league.teams),
        ("league.replacement_sample", config.league.replacement_sample),
    ];
    for (name, val) in league_fields {
        if *val == 0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must be > 0".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
