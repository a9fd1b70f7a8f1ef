//! Error types for sitecheck operations.
//!
//! This module defines [`SiteCheckError`], the error type for failures that
//! happen outside any single check, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Problems found *by* a check are diagnostics, never errors
//! - Loaders return `SiteCheckError` and the calling validator turns it
//!   into a diagnostic scoped to the file or field
//! - Only failures outside any check (unreadable policy file, broken
//!   output stream) escape to `main`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sitecheck operations.
#[derive(Debug, Error)]
pub enum SiteCheckError {
    /// Site configuration file not found at the expected location.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Site configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Content directory does not exist.
    #[error("Content directory not found: {path}")]
    ContentRootNotFound { path: PathBuf },

    /// Policy file exists but is not valid.
    #[error("Failed to parse policy at {path}: {message}")]
    PolicyParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for sitecheck operations.
pub type Result<T> = std::result::Result<T, SiteCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = SiteCheckError::ConfigNotFound {
            path: PathBuf::from("/site/config.toml"),
        };
        assert!(err.to_string().contains("/site/config.toml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = SiteCheckError::ConfigParseError {
            path: PathBuf::from("hugo.toml"),
            message: "expected `=`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("hugo.toml"));
        assert!(msg.contains("expected `=`"));
    }

    #[test]
    fn content_root_not_found_displays_path() {
        let err = SiteCheckError::ContentRootNotFound {
            path: PathBuf::from("content"),
        };
        assert!(err.to_string().contains("Content directory not found"));
    }

    #[test]
    fn policy_parse_error_displays_message() {
        let err = SiteCheckError::PolicyParseError {
            path: PathBuf::from("sitecheck.yml"),
            message: "invalid type".into(),
        };
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SiteCheckError = io_err.into();
        assert!(matches!(err, SiteCheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(SiteCheckError::ContentRootNotFound {
                path: PathBuf::from("missing"),
            })
        }
        assert!(returns_error().is_err());
    }
}
