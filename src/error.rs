//! Error types and exit codes for waymark

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for waymark operations
#[derive(Error, Debug)]
pub enum WaymarkError {
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    #[error("Key already exists: {key}")]
    KeyAlreadyExists { key: String },

    #[error("Empty key: a shortcut name needs at least one segment")]
    EmptyKey,

    #[error("Registry unavailable at {}: {message}", path.display())]
    StorageUnavailable { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Environment error: {message}")]
    Environment { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaymarkError {
    /// Convert error to the process exit code:
    /// - 0: Resolved path printed
    /// - 1: Listing printed (no match, ambiguous, plain list)
    /// - 2: Registry updated
    /// - 3: Hierarchical key errors
    /// - 4: Storage, configuration, environment or IO failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::KeyNotFound { .. } => ExitCode::from(3),
            Self::KeyAlreadyExists { .. } => ExitCode::from(3),
            Self::EmptyKey => ExitCode::from(3),
            Self::StorageUnavailable { .. } => ExitCode::from(4),
            Self::ConfigError { .. } => ExitCode::from(4),
            Self::Environment { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(4),
        }
    }
}

/// Result type alias for waymark operations
pub type Result<T> = std::result::Result<T, WaymarkError>;
