//! # Models Crate
//!
//! The two scoring models behind the hybrid recommender.
//!
//! ## Components
//!
//! ### Content Model
//! TF-IDF over each movie's bag-of-words metadata document:
//! - "Movies that talk about what your movie talks about"
//! - One vocabulary fit per request over the whole corpus
//! - Cosine similarity in [0, 1] against every other movie
//!
//! ### Sentiment Classifier
//! Multinomial Naive Bayes over review text:
//! - Trained per request on a labeled seed corpus
//! - Reproducible 80/20 train/holdout split for a diagnostic accuracy
//! - Per movie, the positive ratio of its reviews becomes the
//!   sentiment signal
//!
//! ## Example Usage
//!
//! ```ignore
//! use models::{ContentModel, Sentiment, SentimentClassifier};
//!
//! let model = ContentModel::build(&movies);
//! let similar = model.similar_to("Inception");
//!
//! let mut classifier = SentimentClassifier::new();
//! let report = classifier.train(&texts, &labels)?;
//! let ratio = classifier.positive_ratio(&movie_reviews)?;
//! ```

// Public modules
pub mod content;
pub mod sentiment;

// Re-export commonly used types
pub use content::ContentModel;
pub use sentiment::{ModelError, Sentiment, SentimentClassifier, TrainReport};
