//! Parser for the JSON catalog file.
//!
//! The catalog file bundles everything one demo deployment needs:
//!
//! ```json
//! {
//!   "movies":  [ { "id": 603, "title": "The Matrix", ... } ],
//!   "reviews": { "603": [ { "author": "r1", "content": "..." } ] },
//!   "sentiment_seed": [ { "text": "loved it", "positive": true } ]
//! }
//! ```
//!
//! `reviews` and `sentiment_seed` are optional; a catalog with bare movie
//! metadata is still valid.

use crate::error::{Result, SourceError};
use crate::types::{MovieId, MovieRecord, ReviewRecord, SeedReview};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Deserialized contents of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub movies: Vec<MovieRecord>,
    /// Reviews keyed by movie id.
    #[serde(default)]
    pub reviews: HashMap<MovieId, Vec<ReviewRecord>>,
    /// Labeled reviews used to train the sentiment classifier.
    #[serde(default)]
    pub sentiment_seed: Vec<SeedReview>,
}

/// Load and parse a catalog file from disk.
pub fn load_catalog(path: &Path) -> Result<CatalogFile> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SourceError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => SourceError::Io(e),
    })?;
    let catalog = serde_json::from_reader(BufReader::new(file))?;
    Ok(catalog)
}

/// Parse a catalog from an in-memory JSON string.
pub fn parse_catalog(json: &str) -> Result<CatalogFile> {
    Ok(serde_json::from_str(json)?)
}
