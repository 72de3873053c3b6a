use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{ Deserialize, Serialize };
use thiserror::Error;

use crate::implementations::clock::{ ManualClock, SystemClock };
use crate::models::common::Timestamp;
use crate::traits::clock::Clock;

pub const LOG_LEVEL_ENV: &str = "BUILDREG_LOG_LEVEL";
pub const OUTPUT_FORMAT_ENV: &str = "BUILDREG_OUTPUT_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value {value:?} for {field}")]
    InvalidValue { field: String, value: String },
}

/// How results are printed by the command line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                field: "output_format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Wall-clock time
    System,
    /// Deterministic time starting at `start_ms`, advancing `step_ms` per read
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    pub mode: ClockMode,

    #[serde(default)]
    pub start_ms: u64,

    #[serde(default)]
    pub step_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            mode: ClockMode::System,
            start_ms: 0,
            step_ms: 0,
        }
    }
}

impl ClockConfig {
    /// Build the clock described by this config
    pub fn build(&self) -> Arc<dyn Clock + Send + Sync> {
        match self.mode {
            ClockMode::System => Arc::new(SystemClock::new()),
            ClockMode::Manual => {
                Arc::new(ManualClock::new(Timestamp::from_millis(self.start_ms), self.step_ms))
            }
        }
    }
}

/// Configuration for the ledger tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    #[serde(default)]
    pub clock: ClockConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Text
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_format: default_output_format(),
            clock: ClockConfig::default(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: LedgerConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Let `BUILDREG_LOG_LEVEL` and `BUILDREG_OUTPUT_FORMAT` win over file values.
    ///
    /// Returns the names of the variables that were applied. This usually runs before
    /// a logger exists, so reporting them is left to the caller.
    pub fn apply_env_overrides(&mut self) -> Result<Vec<&'static str>, ConfigError> {
        let mut applied = Vec::new();
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            self.log_level = level;
            applied.push(LOG_LEVEL_ENV);
        }
        if let Ok(format) = std::env::var(OUTPUT_FORMAT_ENV) {
            self.output_format = format.parse()?;
            applied.push(OUTPUT_FORMAT_ENV);
        }
        Ok(applied)
    }
}
