//! Error types for lcns operations.
//!
//! This module defines [`LcnsError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LcnsError` for failures that end the run with a message
//! - Cache failures have their own [`CacheError`](crate::cache::CacheError)
//!   and never reach this type; the caller logs them and moves on
//! - Use `anyhow::Error` (via `LcnsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lcns operations.
#[derive(Debug, Error)]
pub enum LcnsError {
    /// The license catalog could not be reached or answered with an error.
    #[error("License catalog unavailable: {message}")]
    CatalogUnavailable { message: String },

    /// The catalog has no license with this key.
    #[error("Unknown license: {key}")]
    LicenseNotFound { key: String },

    /// The operator interrupted a prompt.
    #[error("Interrupted")]
    Interrupted,

    /// Reading the operator's answer from the input stream failed.
    #[error("Failed to scan user input: {0}")]
    Scan(#[source] std::io::Error),

    /// The output file already exists and `--force` was not given.
    #[error("Cannot create file {path:?}: file exists")]
    OutputExists { path: PathBuf },

    /// Command-line arguments are inconsistent.
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// The user settings file is unreadable or malformed.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lcns operations.
pub type Result<T> = std::result::Result<T, LcnsError>;
