//! Error types for the catalog crate.
//!
//! The variants map onto the two failure modes the recommendation engine
//! cares about: a title that simply does not exist upstream (`NotFound`,
//! an expected outcome) and a source that could not be reached at all
//! (`Unavailable`, surfaced to the user as "service unavailable").

use thiserror::Error;

/// Errors that can occur while fetching or loading movie data.
#[derive(Error, Debug)]
pub enum SourceError {
    /// No movie matched the requested title.
    ///
    /// This is an expected, non-exceptional outcome. Callers render it
    /// as "not found" rather than as a generic failure.
    #[error("no movie found matching \"{title}\"")]
    NotFound { title: String },

    /// The upstream source could not be reached (transport or rate limit).
    #[error("movie source unavailable: {reason}")]
    Unavailable { reason: String },

    /// Catalog file could not be found or opened.
    #[error("failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file contained malformed JSON or missing required fields.
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, SourceError>;
