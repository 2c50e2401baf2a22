use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::menu_actor::StockPolicy;

pub const DEFAULT_CONFIG_PATH: &str = "cafe.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse config file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulated per-request latency of the store.
    pub latency_ms: u64,
    /// Capacity of the store's request channel.
    pub buffer_size: usize,
    /// Start from the café's opening menu instead of an empty store.
    pub seed_menu: bool,
    /// Items with `stock` strictly below this are reported as running low.
    pub low_stock_threshold: i64,
    pub stock_policy: StockPolicy,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            buffer_size: 32,
            seed_menu: true,
            low_stock_threshold: 10,
            stock_policy: StockPolicy::AllowNegative,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Settings for tests and embedding: no latency, empty store.
    pub fn immediate() -> Self {
        Self {
            latency_ms: 0,
            seed_menu: false,
            ..Self::default()
        }
    }

    /// Applies `CAFE_*` overrides, looking each key up through `lookup`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(v) = lookup("CAFE_LATENCY_MS") {
            self.latency_ms = parse_env("CAFE_LATENCY_MS", v)?;
        }
        if let Some(v) = lookup("CAFE_BUFFER_SIZE") {
            self.buffer_size = parse_env("CAFE_BUFFER_SIZE", v)?;
        }
        if let Some(v) = lookup("CAFE_SEED_MENU") {
            self.seed_menu = parse_env("CAFE_SEED_MENU", v)?;
        }
        if let Some(v) = lookup("CAFE_LOW_STOCK_THRESHOLD") {
            self.low_stock_threshold = parse_env("CAFE_LOW_STOCK_THRESHOLD", v)?;
        }
        if let Some(v) = lookup("CAFE_STOCK_POLICY") {
            self.stock_policy = parse_env("CAFE_STOCK_POLICY", v)?;
        }
        if let Some(v) = lookup("CAFE_LOG_FILTER") {
            self.log_filter = v;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv { key, value })
}

/// Reads settings from a TOML file (defaults when it does not exist).
pub fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
    };
    toml::from_str(&raw).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Defaults, then the TOML file, then `CAFE_*` environment variables.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let mut settings = read_settings_file(path)?;
    settings.apply_env_overrides(|key| std::env::var(key).ok())?;
    Ok(settings)
}
