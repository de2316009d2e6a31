//! The `MovieSource` trait and its in-memory implementation.
//!
//! The recommendation engine never talks to an upstream API directly; it
//! consumes this trait. `InMemorySource` serves a parsed catalog file and
//! is the implementation used by the CLI and the tests. A network-backed
//! implementation (TMDB or similar) plugs in behind the same trait without
//! touching the engine.

use crate::error::{Result, SourceError};
use crate::parser::CatalogFile;
use crate::types::{MovieId, MovieRecord, ReviewRecord};
use std::collections::HashMap;
use std::path::Path;

/// Provider of movie metadata and user reviews.
///
/// ## Contract
/// - `fetch_metadata` fails with [`SourceError::NotFound`] when no movie
///   matches the title, and [`SourceError::Unavailable`] on transport-level
///   failure.
/// - `fetch_reviews` returns an empty vec (not an error) when a movie has
///   no reviews.
/// - Fetches are independent, retryable, and side-effect-free on failure,
///   so callers may isolate a failed movie without aborting the rest.
pub trait MovieSource: Send + Sync {
    /// Fetch metadata for a movie by title (case-insensitive, first match).
    fn fetch_metadata(&self, title: &str) -> Result<MovieRecord>;

    /// Fetch all user reviews for a movie.
    fn fetch_reviews(&self, movie_id: MovieId) -> Result<Vec<ReviewRecord>>;
}

/// A `MovieSource` backed by an in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    movies: Vec<MovieRecord>,
    reviews: HashMap<MovieId, Vec<ReviewRecord>>,
}

impl InMemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from a parsed catalog file.
    pub fn from_catalog(catalog: CatalogFile) -> Self {
        Self {
            movies: catalog.movies,
            reviews: catalog.reviews,
        }
    }

    /// Load a catalog file from disk and build a source from it.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::from_catalog(crate::parser::load_catalog(path)?))
    }

    /// Insert a movie into the source.
    pub fn insert_movie(&mut self, movie: MovieRecord) {
        self.movies.push(movie);
    }

    /// Insert a review for a movie.
    pub fn insert_review(&mut self, movie_id: MovieId, review: ReviewRecord) {
        self.reviews.entry(movie_id).or_default().push(review);
    }

    /// All catalog titles in corpus order.
    pub fn titles(&self) -> Vec<String> {
        self.movies.iter().map(|m| m.title.clone()).collect()
    }
}

impl MovieSource for InMemorySource {
    fn fetch_metadata(&self, title: &str) -> Result<MovieRecord> {
        self.movies
            .iter()
            .find(|m| m.title.eq_ignore_ascii_case(title))
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                title: title.to_string(),
            })
    }

    fn fetch_reviews(&self, movie_id: MovieId) -> Result<Vec<ReviewRecord>> {
        Ok(self.reviews.get(&movie_id).cloned().unwrap_or_default())
    }
}
