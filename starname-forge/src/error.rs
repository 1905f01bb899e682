//! Error types for starname-forge

use thiserror::Error;

/// Result type alias for forge operations
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Errors from extracting or writing catalogues
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Nothing matched; the page layout has probably changed
    #[error("No {what} extracted - the page layout may have changed")]
    NoNamesExtracted { what: &'static str },

    /// I/O error while reading HTML or writing a catalogue
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalogue serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Page download failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
