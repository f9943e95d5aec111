//! Error types and Result aliases for realmterm
//!
//! Terminal-level mistakes (unknown verbs, bad arguments, unknown `cd`
//! targets) are never errors here: they are transcript entries. This enum
//! only covers failures of the surrounding machinery.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for realmterm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for realmterm
#[derive(Debug, Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to save configuration file
    #[error("Failed to save config to '{}': {reason}", path.display())]
    ConfigSaveFailed { path: PathBuf, reason: String },

    /// Configuration file not found
    #[error("Configuration file not found")]
    ConfigNotFound,

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    // === Driver errors ===
    /// A line of an event script could not be decoded
    #[error("Invalid event on line {line}: {reason}")]
    InvalidEvent { line: usize, reason: String },

    /// Command line argument problem
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },
}
