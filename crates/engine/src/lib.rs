//! # Engine Crate
//!
//! The hybrid recommendation engine: per request, it fetches the corpus
//! through a [`catalog::MovieSource`], builds a content model, trains a
//! sentiment classifier on a labeled seed corpus, and blends the two
//! signals into a ranked list.
//!
//! ## Main Components
//!
//! - **recommender**: `RecommendationEngine`, the request orchestrator
//! - **ranker**: the 0.7/0.3 blend, stable sort, and top-n truncation
//! - **error**: `EngineError` (`NotFound` vs `SourceUnavailable`)
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::RecommendationEngine;
//! use catalog::InMemorySource;
//!
//! let source = InMemorySource::from_path(path)?;
//! let titles = source.titles();
//! let engine = RecommendationEngine::new(source, titles, seed);
//!
//! let entries = engine.get_recommendations("Inception", 5)?;
//! for entry in entries {
//!     println!("{}: {}", entry.title, entry.final_score);
//! }
//! ```

// Public modules
pub mod error;
pub mod ranker;
pub mod recommender;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use ranker::{
    DEFAULT_TOP_N, RecommendationEntry, SENTIMENT_WEIGHT, SIMILARITY_WEIGHT,
    rank,
};
pub use recommender::RecommendationEngine;
