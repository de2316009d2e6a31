//! Core domain types for the movie catalog.
//!
//! Records are immutable once fetched: a `MovieRecord` is owned by the
//! caller for the duration of one recommendation request and nothing here
//! is persisted or cached across requests.

use serde::{Deserialize, Serialize};

/// Unique identifier for a movie, opaque and source-provided.
pub type MovieId = u64;

/// Structured metadata for a single movie.
///
/// All textual fields default to empty when absent in the serialized form,
/// so a sparse upstream record never crashes the vectorizer downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    /// Primary lookup key; matched case-insensitively.
    pub title: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Cast names in billing order. Only the first [`MovieRecord::CAST_CAP`]
    /// contribute to the bag-of-words document.
    #[serde(default)]
    pub cast: Vec<String>,
}

impl MovieRecord {
    /// Number of top-billed cast names included in the bag-of-words.
    pub const CAST_CAP: usize = 5;

    /// Combine genres, overview, keywords, and capped cast names into a
    /// single space-separated document for vectorization.
    ///
    /// Regenerated on every call; empty fields contribute nothing (no
    /// doubled separators).
    pub fn bag_of_words(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.genres.iter().map(String::as_str));
        if !self.overview.is_empty() {
            parts.push(&self.overview);
        }
        parts.extend(self.keywords.iter().map(String::as_str));
        parts.extend(
            self.cast
                .iter()
                .take(Self::CAST_CAP)
                .map(String::as_str),
        );
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

/// A single user review for a movie.
///
/// Transient: fetched, cleaned, consumed by the sentiment classifier,
/// then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub author: String,
    pub content: String,
}

/// A labeled review used to seed the sentiment classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReview {
    pub text: String,
    /// `true` for a positive example, `false` for a negative one.
    pub positive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> MovieRecord {
        MovieRecord {
            id: 27205,
            title: "Inception".to_string(),
            genres: vec!["Action".to_string(), "Science Fiction".to_string()],
            overview: "a thief who steals secrets".to_string(),
            keywords: vec!["dream".to_string(), "heist".to_string()],
            cast: vec![
                "Leonardo DiCaprio".to_string(),
                "Joseph Gordon-Levitt".to_string(),
            ],
        }
    }

    #[test]
    fn test_bag_of_words_joins_all_fields() {
        let bag = movie().bag_of_words();
        assert_eq!(
            bag,
            "Action Science Fiction a thief who steals secrets dream heist \
             Leonardo DiCaprio Joseph Gordon-Levitt"
        );
    }

    #[test]
    fn test_bag_of_words_caps_cast_at_five() {
        let mut m = movie();
        m.cast = (0..8).map(|i| format!("actor{i}")).collect();
        let bag = m.bag_of_words();
        assert!(bag.contains("actor4"));
        assert!(!bag.contains("actor5"));
    }

    #[test]
    fn test_bag_of_words_skips_empty_fields() {
        let m = MovieRecord {
            id: 1,
            title: "Empty".to_string(),
            genres: vec![],
            overview: String::new(),
            keywords: vec![],
            cast: vec![],
        };
        assert_eq!(m.bag_of_words(), "");
    }

    #[test]
    fn test_movie_record_deserializes_with_missing_fields() {
        // Only id and title are required; everything else defaults to empty
        let m: MovieRecord =
            serde_json::from_str(r#"{"id": 7, "title": "Sparse"}"#).unwrap();
        assert_eq!(m.id, 7);
        assert!(m.genres.is_empty());
        assert!(m.overview.is_empty());
        assert!(m.keywords.is_empty());
        assert!(m.cast.is_empty());
    }
}
