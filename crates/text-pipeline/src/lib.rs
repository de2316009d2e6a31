//! # Text Pipeline Crate
//!
//! Shared text preprocessing for the recommendation engine.
//!
//! ## Main Components
//!
//! - **normalize**: clean raw text into a canonical token stream
//!   (lowercase, letters only, stop words dropped, lemmatized)
//! - **tfidf**: TF-IDF vectorization over normalized documents,
//!   shared by the content model and the sentiment classifier
//!
//! ## Example Usage
//!
//! ```
//! use text_pipeline::{clean_text, TfidfVectorizer};
//!
//! let docs: Vec<String> = ["The heroes were fighting!", "A quiet romance."]
//!     .iter()
//!     .map(|raw| clean_text(raw))
//!     .collect();
//!
//! let (matrix, vectorizer) = TfidfVectorizer::fit_transform(&docs);
//! assert_eq!(matrix.len(), 2);
//! assert!(vectorizer.vocabulary_size() > 0);
//! ```

// Public modules
pub mod normalize;
pub mod tfidf;

// Re-export commonly used items
pub use normalize::{clean_text, lemmatize};
pub use tfidf::{DEFAULT_MAX_FEATURES, SparseVector, TfidfVectorizer};
