//! Domain error types

use thiserror::Error;

/// Error when running the wrapped command
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to spawn command: {0}")]
    SpawnFailed(String),

    #[error("Failed to wait for command: {0}")]
    WaitFailed(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

/// Error when appending to the history log
#[derive(Debug, Error)]
#[error("Failed to append history record: {0}")]
pub struct HistoryError(pub String);
