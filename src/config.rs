//! Configuration System
//!
//! Loads dashboard defaults from a TOML file with `SOUNDBANK_*` environment
//! variable overrides.

use crate::dashboard::{DashboardOptions, Tab};
use crate::data::{DataProvider, DataSource, FixtureProvider, GeneratedProvider};
use crate::metrics::Metric;
use crate::range::{Preset, Timestamp};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard presentation defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_preset")]
    pub default_preset: Preset,

    #[serde(default)]
    pub default_tab: Tab,

    #[serde(default)]
    pub default_metric: Metric,
}

fn default_title() -> String {
    "Analytics Dashboard".to_string()
}

fn default_description() -> String {
    "Track your performance and engagement".to_string()
}

fn default_preset() -> Preset {
    Preset::Last30Days
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            default_preset: default_preset(),
            default_tab: Tab::default(),
            default_metric: Metric::default(),
        }
    }
}

/// Row data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub source: DataSource,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_rows_per_table")]
    pub rows_per_table: usize,

    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

fn default_seed() -> u64 {
    42
}

fn default_rows_per_table() -> usize {
    8
}

fn default_window_days() -> i64 {
    90
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            seed: default_seed(),
            rows_per_table: default_rows_per_table(),
            window_days: default_window_days(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok(LoadedConfig {
            config,
            path: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("soundbank").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |key| std::env::var(key).ok())
    }

    /// First existing file of `paths` that parses, else defaults
    ///
    /// Files that exist but fail to load are reported in the warnings.
    fn load_first(paths: &[PathBuf], lookup: impl Fn(&str) -> Option<String>) -> LoadedConfig {
        let mut warnings = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    warnings.extend(config.apply_overrides(&lookup));
                    return LoadedConfig {
                        config,
                        path: Some(path.clone()),
                        warnings,
                    };
                }
                Err(e) => warnings.push(format!("Failed to load config, using defaults: {}", e)),
            }
        }

        let mut config = Config::default();
        warnings.extend(config.apply_overrides(&lookup));
        LoadedConfig {
            config,
            path: None,
            warnings,
        }
    }

    /// Apply `SOUNDBANK_*` environment overrides
    pub fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `SOUNDBANK_*` overrides from `lookup`
    ///
    /// Unparseable values are skipped and returned as warnings.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut warnings = Vec::new();

        // Dashboard overrides
        if let Some(title) = lookup("SOUNDBANK_TITLE") {
            self.dashboard.title = title;
        }
        if let Some(preset) = parsed(&lookup, "SOUNDBANK_DEFAULT_PRESET", &mut warnings) {
            self.dashboard.default_preset = preset;
        }
        if let Some(tab) = parsed(&lookup, "SOUNDBANK_DEFAULT_TAB", &mut warnings) {
            self.dashboard.default_tab = tab;
        }
        if let Some(metric) = parsed(&lookup, "SOUNDBANK_DEFAULT_METRIC", &mut warnings) {
            self.dashboard.default_metric = metric;
        }

        // Data overrides
        if let Some(source) = parsed(&lookup, "SOUNDBANK_DATA_SOURCE", &mut warnings) {
            self.data.source = source;
        }
        if let Some(seed) = parsed(&lookup, "SOUNDBANK_SEED", &mut warnings) {
            self.data.seed = seed;
        }
        if let Some(rows) = parsed(&lookup, "SOUNDBANK_ROWS", &mut warnings) {
            self.data.rows_per_table = rows;
        }
        if let Some(days) = parsed(&lookup, "SOUNDBANK_WINDOW_DAYS", &mut warnings) {
            self.data.window_days = days;
        }

        // Logging overrides
        if let Some(level) = lookup("SOUNDBANK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SOUNDBANK_LOG_FORMAT") {
            self.logging.format = format;
        }

        warnings
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            title: self.dashboard.title.clone(),
            description: self.dashboard.description.clone(),
            initial_range: None,
            default_preset: self.dashboard.default_preset,
            selected_metric: self.dashboard.default_metric,
            active_tab: self.dashboard.default_tab,
            chart_seed: self.data.seed,
        }
    }

    /// Row provider for the configured source, generated rows anchored at `now`
    pub fn provider(&self, now: Timestamp) -> Box<dyn DataProvider> {
        match self.data.source {
            DataSource::Fixtures => Box::new(FixtureProvider),
            DataSource::Generated => Box::new(
                GeneratedProvider::seeded(self.data.seed, now)
                    .rows(self.data.rows_per_table)
                    .window_days(self.data.window_days),
            ),
        }
    }
}

fn parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring invalid {}={:?}", key, raw));
            None
        }
    }
}

/// A loaded config with the problems found while loading it
///
/// Loading happens before logging is configured, so problems are collected
/// here and reported through `log` once a subscriber is installed.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from, `None` for defaults
    pub path: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    pub fn log(&self) {
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Soundbank Analytics Configuration
#
# Environment variables override these settings:
# - SOUNDBANK_TITLE
# - SOUNDBANK_DEFAULT_PRESET
# - SOUNDBANK_DEFAULT_TAB
# - SOUNDBANK_DEFAULT_METRIC
# - SOUNDBANK_DATA_SOURCE
# - SOUNDBANK_SEED
# - SOUNDBANK_ROWS
# - SOUNDBANK_WINDOW_DAYS
# - SOUNDBANK_LOG_LEVEL
# - SOUNDBANK_LOG_FORMAT

[dashboard]
title = "Analytics Dashboard"
description = "Track your performance and engagement"

# Initial range: today, yesterday, 7days, 30days, thisWeek, thisMonth
default_preset = "30days"

# Initial tab: sounds, soundpacks, purchasers
default_tab = "sounds"

# Charted metric: streams, likes, purchases, credits, cashouts, users, rank
default_metric = "streams"

[data]
# Row source: generated (dated around now) or fixtures (the 2023-2024 demo catalog)
source = "generated"

# Seed for generated rows and chart values
seed = 42

# Rows per table when generating
rows_per_table = 8

# Generated dates fall within this many days before now
window_days = 90

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
