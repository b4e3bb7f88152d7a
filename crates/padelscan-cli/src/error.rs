//! Error types for the padelscan CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal CLI errors. Provider failures are not fatal — they are carried
/// inside the report — so only usage and serialization faults end up here.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file problems.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// JSON serialization of the report failed.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A specialized Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
