//! Error types for recipe operations.
//!
//! This module defines [`RecipeError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing remote command aborts the current recipe with `CommandFailed`
//! - There are no retries; re-running the recipe is the recovery path
//! - Use `anyhow::Error` (via `RecipeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for recipe operations.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Referenced recipe does not exist.
    #[error("Unknown recipe: {name}")]
    UnknownRecipe { name: String },

    /// Remote command exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The session itself could not run a command (ssh missing, spawn failure).
    #[error("Session to {target} failed: {message}")]
    SessionFailed { target: String, message: String },

    /// Downloaded file has an extension we cannot unpack.
    #[error("Unsupported archive format: {file}")]
    UnsupportedArchive { file: String },

    /// Install finished but the guarded executable is still missing.
    #[error("Recipe '{recipe}' completed but '{executable}' is not on PATH")]
    NotInstalled { recipe: String, executable: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RecipeError {
    /// Whether this error comes from configuration rather than execution.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
                | Self::UnknownRecipe { .. }
        )
    }
}

/// Result type alias for recipe operations.
pub type Result<T> = std::result::Result<T, RecipeError>;
