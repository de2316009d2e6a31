//! Error surface of the recommendation engine.

use thiserror::Error;

/// Errors returned by [`crate::RecommendationEngine`].
///
/// `NotFound` is an expected outcome the transport layer renders as
/// "movie not found"; everything else is a genuine failure.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The query title was empty or matched no movie in the corpus.
    #[error("no movie found matching \"{title}\"")]
    NotFound { title: String },

    /// The metadata/review source could not serve the request at all.
    #[error("movie source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// A model-contract violation bubbled up (e.g. predict before train).
    #[error(transparent)]
    Model(#[from] models::ModelError),
}

impl EngineError {
    /// True for the expected "unknown movie" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, EngineError>;
