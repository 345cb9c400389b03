//! Structured error types for the compensation CLI

use lib_compensation::CompensationError;
use thiserror::Error;

/// Compensation CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    // Configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // Engine
    #[error("Compensation error: {0}")]
    Compensation(#[from] CompensationError),

    // Serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
