//! Error types for distlab-core
//!
//! The statistics engines never fail. Errors here come from the caller
//! side: edits that name a row that no longer exists, and configuration
//! that cannot be read or is out of range.

use crate::table::RecordId;
use thiserror::Error;

/// Main error type for workbench operations
#[derive(Error, Debug)]
pub enum WorkbenchError {
    /// Edit or removal of an id that is not in the sheet
    #[error("Row not found: {id}")]
    RowNotFound { id: RecordId },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML or JSON could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for workbench operations
pub type WorkbenchResult<T> = Result<T, WorkbenchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
