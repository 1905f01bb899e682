//! Error types for starname-generator
//!
//! This module provides structured error handling using thiserror.
//! Every variant belongs to one [`ErrorKind`], which is what callers
//! usually branch on.

use crate::core::models::CatalogueId;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Broad classification of a [`GeneratorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Catalogue missing, unreachable or malformed
    Load,
    /// Sampling attempted before `init()`
    NotInitialized,
    /// Count is not a positive integer
    Validation,
    /// Unique draw larger than the distinct pool, or a draw too large to hold
    Range,
    /// Inconsistent or unreadable configuration
    Config,
}

/// Errors that can occur while loading catalogues or drawing names
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// IO error while reading a catalogue
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalogue document is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP error while fetching a catalogue
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Catalogue resource does not exist
    #[error("Catalogue not found: {location}")]
    CatalogueNotFound { location: String },

    /// Catalogue decoded, but not to a non-empty array of non-empty strings
    #[error("Malformed {catalogue} catalogue: {message}")]
    MalformedCatalogue {
        catalogue: CatalogueId,
        message: String,
    },

    /// Sampling was attempted before the catalogues were loaded
    #[error("Call init() before using {operation}()")]
    NotInitialized { operation: &'static str },

    /// Count is not a positive integer
    #[error("`count` must be a positive integer, got {value}")]
    InvalidCount { value: String },

    /// Unique draw requested beyond the distinct-value pool
    #[error("Not enough distinct {catalogue} names: {requested} requested, {available} available")]
    NotEnoughNames {
        catalogue: CatalogueId,
        requested: usize,
        available: usize,
    },

    /// Repeat-allowed draw too large to hold in memory
    #[error("Cannot draw {requested} {catalogue} names: result does not fit in memory")]
    CountTooLarge {
        catalogue: CatalogueId,
        requested: usize,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<GeneratorError>,
    },
}

impl GeneratorError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        GeneratorError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        GeneratorError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a malformed catalogue error
    pub fn malformed(catalogue: CatalogueId, message: impl Into<String>) -> Self {
        GeneratorError::MalformedCatalogue {
            catalogue,
            message: message.into(),
        }
    }

    /// Create an invalid count error from anything displayable
    pub fn invalid_count(value: impl ToString) -> Self {
        GeneratorError::InvalidCount {
            value: value.to_string(),
        }
    }

    /// Classify this error. Context wrappers report the kind of the wrapped error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeneratorError::Io(_)
            | GeneratorError::Json(_)
            | GeneratorError::CatalogueNotFound { .. }
            | GeneratorError::MalformedCatalogue { .. }
            | GeneratorError::Http { .. } => ErrorKind::Load,
            GeneratorError::NotInitialized { .. } => ErrorKind::NotInitialized,
            GeneratorError::InvalidCount { .. } => ErrorKind::Validation,
            GeneratorError::NotEnoughNames { .. } | GeneratorError::CountTooLarge { .. } => {
                ErrorKind::Range
            }
            GeneratorError::InvalidConfig { .. } => ErrorKind::Config,
            GeneratorError::WithContext { source, .. } => source.kind(),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enough_names_mentions_both_counts() {
        let err = GeneratorError::NotEnoughNames {
            catalogue: CatalogueId::Stars,
            requested: 4,
            available: 3,
        };
        assert!(err.to_string().contains("4 requested, 3 available"));
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_not_initialized_names_operation() {
        let err = GeneratorError::NotInitialized {
            operation: "random_star",
        };
        assert_eq!(err.to_string(), "Call init() before using random_star()");
        assert_eq!(err.kind(), ErrorKind::NotInitialized);
    }

    #[test]
    fn test_error_with_context_keeps_kind() {
        let err = GeneratorError::malformed(CatalogueId::Constellations, "not an array");
        let wrapped = err.with_context("loading constellations");
        assert!(wrapped.to_string().contains("loading constellations"));
        assert!(wrapped.to_string().contains("not an array"));
        assert_eq!(wrapped.kind(), ErrorKind::Load);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GeneratorError = io_err.into();
        assert!(matches!(err, GeneratorError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: GeneratorError = json_err.into();
        assert!(matches!(err, GeneratorError::Json(_)));
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[test]
    fn test_invalid_count_helper() {
        let err = GeneratorError::invalid_count(1.5);
        assert!(err.to_string().contains("1.5"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(GeneratorError::invalid_config("test"));
        let err = result.context("during processing").unwrap_err();
        assert!(err.to_string().contains("during processing"));
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
