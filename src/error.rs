//! Error types for Folio
//!
//! Only loading can fail: configuration and content files. Everything the page
//! does at runtime is infallible by construction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML file could not be parsed
    #[error("invalid TOML in {file}: {message}")]
    InvalidToml { file: PathBuf, message: String },

    /// Content file parsed but breaks a content invariant
    #[error("invalid content in {file}: {message}")]
    InvalidContent { file: PathBuf, message: String },

    /// Section name not recognised
    #[error("unknown section '{name}' (expected one of: {expected})")]
    UnknownSection { name: String, expected: String },

    /// Argument or config value outside its accepted range
    #[error("invalid {what} '{value}': {reason}")]
    InvalidValue {
        what: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_invalid_content() {
        let err = FolioError::InvalidContent {
            file: PathBuf::from("content/site.toml"),
            message: "duplicate experience id 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid content in content/site.toml: duplicate experience id 2"
        );
    }

    #[test]
    fn test_error_display_invalid_value() {
        let err = FolioError::InvalidValue {
            what: "width",
            value: "NaN".to_string(),
            reason: "must be a positive number",
        };
        assert_eq!(err.to_string(), "invalid width 'NaN': must be a positive number");
    }

    #[test]
    fn test_error_display_unknown_section() {
        let err = FolioError::UnknownSection {
            name: "pricing".to_string(),
            expected: "about, projects".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown section 'pricing' (expected one of: about, projects)"
        );
    }
}
