//! # Catalog Crate
//!
//! This crate holds the movie data model and the data-source boundary for
//! the recommendation engine.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, ReviewRecord, SeedReview)
//! - **parser**: Parse the JSON catalog file into Rust structs
//! - **source**: The `MovieSource` trait plus an in-memory implementation
//! - **error**: Error types for fetching and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{InMemorySource, MovieSource};
//! use std::path::Path;
//!
//! let source = InMemorySource::from_path(Path::new("data/catalog.json"))?;
//!
//! let movie = source.fetch_metadata("Inception")?;
//! let reviews = source.fetch_reviews(movie.id)?;
//!
//! println!("{} has {} reviews", movie.title, reviews.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{Result, SourceError};
pub use parser::{CatalogFile, load_catalog, parse_catalog};
pub use source::{InMemorySource, MovieSource};
pub use types::{MovieId, MovieRecord, ReviewRecord, SeedReview};
