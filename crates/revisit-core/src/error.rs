//! Error types for the Revisit service validator.
//!
//! Two families live here: infrastructure errors (`RevisitError`,
//! `ConfigError`) that are returned from constructors and config loading, and
//! the domain taxonomy (`ValidationError`, keyed by `ErrorKind`) that the
//! validation pipeline records into a report instead of returning.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Top-level error type for Revisit operations.
#[derive(Error, Debug)]
pub enum RevisitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// The reason a service failed validation.
///
/// Display output is the human-readable message stored in a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL must not be empty")]
    InvalidUrl,

    #[error("URL cannot contain a trailing slash")]
    InvalidTrailingSlash,

    #[error("Cannot make a HEAD request to /")]
    InvalidHeadRequest,

    #[error("Your POST request must point to /service")]
    InvalidServicePost,

    #[error("You need to carry the `meta` object in the request")]
    InvalidServiceMeta,

    #[error("You should not destroy incoming data from `meta`")]
    InvalidServiceMetaEmpty,

    #[error("This image isn't a valid data URI")]
    InvalidDataUri,

    #[error("This can only be a PNG, JPEG or GIF")]
    InvalidFileType,

    /// `max_mb` is the configured limit in whole megabytes, rounded down.
    #[error("This image is greater than {max_mb} MB")]
    FileTooLarge { max_mb: u64 },
}

impl ValidationError {
    /// The map key this error is recorded under.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl => ErrorKind::InvalidURL,
            Self::InvalidTrailingSlash => ErrorKind::InvalidTrailingSlash,
            Self::InvalidHeadRequest => ErrorKind::InvalidHeadRequest,
            Self::InvalidServicePost => ErrorKind::InvalidServicePost,
            Self::InvalidServiceMeta => ErrorKind::InvalidServiceMeta,
            Self::InvalidServiceMetaEmpty => ErrorKind::InvalidServiceMetaEmpty,
            Self::InvalidDataUri => ErrorKind::InvalidDataURI,
            Self::InvalidFileType => ErrorKind::InvalidFileType,
            Self::FileTooLarge { .. } => ErrorKind::FileTooLarge,
        }
    }

    /// Build a `FileTooLarge` error from a byte limit.
    pub fn file_too_large(max_size: u64) -> Self {
        Self::FileTooLarge {
            max_mb: max_size / 1_000_000,
        }
    }
}

/// Fixed set of error-kind names used as report keys.
///
/// Variant names are the wire names consumers match on, so they keep their
/// historical casing.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidURL,
    InvalidTrailingSlash,
    InvalidHeadRequest,
    InvalidServicePost,
    InvalidServiceMeta,
    InvalidServiceMetaEmpty,
    InvalidDataURI,
    InvalidFileType,
    FileTooLarge,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidURL => "InvalidURL",
            Self::InvalidTrailingSlash => "InvalidTrailingSlash",
            Self::InvalidHeadRequest => "InvalidHeadRequest",
            Self::InvalidServicePost => "InvalidServicePost",
            Self::InvalidServiceMeta => "InvalidServiceMeta",
            Self::InvalidServiceMetaEmpty => "InvalidServiceMetaEmpty",
            Self::InvalidDataURI => "InvalidDataURI",
            Self::InvalidFileType => "InvalidFileType",
            Self::FileTooLarge => "FileTooLarge",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenience type alias for Revisit results.
pub type Result<T> = std::result::Result<T, RevisitError>;
