//! Configuration options for the predictive opponent.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::markov::domain::DomainError;

/// How the opponent picks a prediction when several follow-ups share the
/// highest count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the first maximal choice in canonical order.
    #[default]
    FirstInOrder,
    /// Pick uniformly among the maximal choices.
    Uniform,
}

/// Configuration for [`PredictiveOpponent`](crate::markov::PredictiveOpponent).
///
/// # Example
/// ```
/// use rps_markov::markov::{OpponentConfig, TieBreak};
///
/// let config = OpponentConfig::default();
/// assert_eq!(config.warmup_rounds, 1);
/// assert_eq!(config.tie_break, TieBreak::FirstInOrder);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Random seed for reproducibility.
    ///
    /// If set, the opponent seeds its generator with this value so a replayed
    /// session produces the same computer moves. If `None`, entropy is used.
    pub seed: Option<u64>,

    /// Completed rounds required before the model is consulted.
    ///
    /// Until then the computer throws uniformly at random. Must be at least 1,
    /// since a prediction needs the player's previous throw.
    pub warmup_rounds: u64,

    /// Tie-break rule for the prediction scan.
    pub tie_break: TieBreak,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            seed: None,
            warmup_rounds: 1,
            tie_break: TieBreak::FirstInOrder,
        }
    }
}

impl OpponentConfig {
    /// Create a new OpponentConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the number of warmup rounds.
    pub fn with_warmup_rounds(mut self, rounds: u64) -> Self {
        self.warmup_rounds = rounds;
        self
    }

    /// Builder method: set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.warmup_rounds == 0 {
            return Err(ConfigError::InvalidWarmup);
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_reader(BufReader::new(file)).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = File::create(path).map_err(ConfigError::Io)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(ConfigError::Json)
    }
}

/// Errors that can occur when building an opponent from configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// `warmup_rounds` was zero.
    InvalidWarmup,
    /// The choice domain is not a proper tournament.
    Domain(DomainError),
    /// Reading or writing a config file failed.
    Io(std::io::Error),
    /// A config file was not valid JSON.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWarmup => write!(f, "warmup_rounds must be at least 1"),
            ConfigError::Domain(e) => write!(f, "Invalid choice domain: {}", e),
            ConfigError::Io(e) => write!(f, "Config file error: {}", e),
            ConfigError::Json(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Domain(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::InvalidWarmup => None,
        }
    }
}

impl From<DomainError> for ConfigError {
    fn from(e: DomainError) -> Self {
        ConfigError::Domain(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_warmup_rejected() {
        let config = OpponentConfig::default().with_warmup_rounds(0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWarmup)));
        assert!(OpponentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: OpponentConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.warmup_rounds, 1);
        assert_eq!(config.tie_break, TieBreak::FirstInOrder);

        let config: OpponentConfig = serde_json::from_str(r#"{"tie_break": "uniform"}"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::Uniform);
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("rps-markov-config-{}.json", std::process::id()));
        let config = OpponentConfig::new()
            .with_seed(42)
            .with_warmup_rounds(3)
            .with_tie_break(TieBreak::Uniform);

        config.save_json(&path).unwrap();
        let loaded = OpponentConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_file_with_zero_warmup_rejected() {
        let path = std::env::temp_dir().join(format!("rps-markov-zero-warmup-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"warmup_rounds": 0}"#).unwrap();
        let result = OpponentConfig::from_json_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::InvalidWarmup)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = OpponentConfig::from_json_file("/nonexistent/rps-markov.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
