//! Configuration for distlab-core
//!
//! Display precision, the measurement unit, and the rows a fresh workbench
//! starts with. Every section has defaults, so a config file only needs the
//! keys it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::continuous::Measurement;
use crate::discrete::ObjectCount;
use crate::error::{ConfigError, ConfigResult};

/// Upper bound for any decimal-places setting
const MAX_DECIMALS: usize = 10;

/// Workbench-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// How values are formatted
    pub display: DisplayConfig,
    /// Rows present before any edit
    pub seed: SeedConfig,
}

/// Display formatting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for probabilities
    pub probability_decimals: usize,
    /// Decimal places for mean, standard deviation and sigma ranges
    pub statistic_decimals: usize,
    /// Unit appended to measurement statistics
    pub unit: String,
    /// Width of the longest bar in text charts
    pub bar_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            probability_decimals: 4,
            statistic_decimals: 2,
            unit: "cm".to_string(),
            bar_width: 40,
        }
    }
}

/// Initial sheet contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub discrete: Vec<ObjectCount>,
    pub continuous: Vec<Measurement>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            discrete: vec![
                ObjectCount::new("Pen", "Blue", 0),
                ObjectCount::new("Pen", "Red", 0),
                ObjectCount::new("Book", "Black", 0),
            ],
            continuous: vec![
                Measurement::new("Chair", 0.0),
                Measurement::new("Desk", 0.0),
                Measurement::new("Person 1", 0.0),
                Measurement::new("Person 2", 0.0),
            ],
        }
    }
}

impl WorkbenchConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a TOML config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.display.probability_decimals > MAX_DECIMALS {
            return Err(ConfigError::OutOfRange(format!(
                "probability_decimals must be at most {}",
                MAX_DECIMALS
            )));
        }

        if self.display.statistic_decimals > MAX_DECIMALS {
            return Err(ConfigError::OutOfRange(format!(
                "statistic_decimals must be at most {}",
                MAX_DECIMALS
            )));
        }

        if self.display.bar_width == 0 {
            return Err(ConfigError::OutOfRange(
                "bar_width must be positive".to_string(),
            ));
        }

        if let Some(m) = self.seed.continuous.iter().find(|m| !m.height.is_finite()) {
            return Err(ConfigError::OutOfRange(format!(
                "seed height for {:?} must be finite",
                m.object
            )));
        }

        Ok(())
    }
}
