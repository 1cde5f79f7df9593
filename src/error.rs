//! Error types for door operations.
//!
//! This module defines [`DoorError`], the primary error type used throughout
//! the door, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Drop-file, store and art errors are shown to the caller and the menu
//!   keeps running
//! - Config errors end the process with a non-zero exit status
//! - Invalid numeric form input never becomes an error; the form re-prompts

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for door operations.
#[derive(Debug, Error)]
pub enum DoorError {
    /// No `door32.sys` (in any letter case) in the session directory.
    #[error("door32.sys file not found in {dir}")]
    DropFileNotFound { dir: PathBuf },

    /// The session directory could not be listed.
    #[error("error reading directory {dir}: {source}")]
    DropFileUnreadable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drop file has fewer lines than the format requires.
    #[error("drop file has insufficient lines ({found} of {required})")]
    InsufficientData { found: usize, required: usize },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Stored application data is not a JSON array of records.
    #[error("could not decode existing data in {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoorError {
    /// True when the error means the caller's input stream is gone.
    pub fn is_hangup(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// Result type alias for door operations.
pub type Result<T> = std::result::Result<T, DoorError>;
