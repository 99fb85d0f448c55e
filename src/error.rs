//! Error types for options storage.
//!
//! This module defines [`OptionsError`], the error type returned when the
//! host storage or the surrounding tooling fails, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - "Applied" / "not applied" outcomes are ordinary values (`bool`,
//!   `Option`) inside `Ok`, never errors
//! - `OptionsError` is reserved for failures of the host or its inputs
//! - Use `anyhow::Error` (via `OptionsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for options operations.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The stored record exists but is not a key/value mapping.
    #[error("Stored record '{slug}' is not a mapping (found {found})")]
    MalformedRecord { slug: String, found: String },

    /// The backing store file could not be parsed.
    #[error("Failed to parse option store at {path}: {message}")]
    StoreParseError { path: PathBuf, message: String },

    /// Explicitly requested settings file does not exist.
    #[error("Settings file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A value supplied by the caller could not be interpreted.
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for options operations.
pub type Result<T> = std::result::Result<T, OptionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_displays_slug_and_kind() {
        let err = OptionsError::MalformedRecord {
            slug: "simmer_private_options".into(),
            found: "string".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("simmer_private_options"));
        assert!(msg.contains("string"));
    }

    #[test]
    fn store_parse_error_displays_path_and_message() {
        let err = OptionsError::StoreParseError {
            path: PathBuf::from("/data/options.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/options.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = OptionsError::ConfigNotFound {
            path: PathBuf::from("/etc/simmer.yml"),
        };
        assert!(err.to_string().contains("/etc/simmer.yml"));
    }

    #[test]
    fn invalid_value_displays_message() {
        let err = OptionsError::InvalidValue {
            message: "expected a JSON object".into(),
        };
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: OptionsError = io_err.into();
        assert!(matches!(err, OptionsError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: OptionsError = anyhow::anyhow!("host went away").into();
        assert_eq!(err.to_string(), "host went away");
    }
}
