//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without recompiling.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub party: PartyTuning,
}

/// Party update probability model.
///
/// Each run, a venue is recomputed only when a first draw lands below
/// `recompute_chance`; the remaining venues keep yesterday's status so the
/// whole roster doesn't flicker daily. Recomputed venues get an active party
/// with probability `base_probability`, plus `weekend_bonus` on party nights
/// and `high_rating_bonus` for venues rated at least `high_rating_threshold`.
#[derive(Debug, Clone, Deserialize)]
pub struct PartyTuning {
    pub recompute_chance: f64,
    pub base_probability: f64,
    pub weekend_bonus: f64,
    pub high_rating_bonus: f64,
    pub high_rating_threshold: f32,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            party: PartyTuning::default(),
        }
    }
}

impl Default for PartyTuning {
    fn default() -> Self {
        Self {
            recompute_chance: 0.3,
            base_probability: 0.3,
            weekend_bonus: 0.3,
            high_rating_bonus: 0.3,
            high_rating_threshold: 4.5,
        }
    }
}

/// Configuration error type
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
