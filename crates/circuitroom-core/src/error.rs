//! Core error types for circuitroom-core.
//!
//! This module defines the error hierarchy using thiserror. Nothing here is
//! fatal: every error is recoverable at the command boundary, and a failing
//! operation never touches exercises other than the one it names.

use std::path::PathBuf;
use thiserror::Error;

use crate::exercise::{MAX_DURATION_SECS, MIN_DURATION_SECS};

/// Core error type for circuitroom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A command referenced an exercise that was deleted or never existed.
    #[error("exercise not found: {id}")]
    NotFound { id: String },

    /// Bad form input at create or edit time. Prior state is unchanged.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The completion chime could not be played. The exercise still
    /// completed; this is reported, never rolled back.
    #[error("notifier error: {0}")]
    Notifier(#[from] NotifierError),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for exercise form data.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field was empty after trimming.
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Duration outside the accepted range.
    #[error("duration must be {MIN_DURATION_SECS}..={MAX_DURATION_SECS} seconds, got {value}")]
    DurationOutOfRange { value: u64 },
}

/// Chime notifier errors.
#[derive(Error, Debug)]
pub enum NotifierError {
    /// No audio backend is available in this environment.
    #[error("chime unavailable: {0}")]
    Unavailable(String),

    /// The backend exists but playing the chime failed.
    #[error("chime failed: {0}")]
    Failed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration or catalog TOML
    #[error("failed to parse TOML: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
