//! # Recommendation Engine
//!
//! This module coordinates one recommendation request end to end:
//! 1. Fetch metadata for every catalog title
//! 2. Build the content model over the fetched corpus
//! 3. Train the sentiment classifier on the labeled seed corpus
//! 4. Fetch and score each movie's reviews
//! 5. Blend, rank, and truncate
//!
//! Everything is request-scoped: both vocabularies are refit on every
//! call and no state survives between requests. A failure fetching one
//! movie is isolated (the movie is excluded from the corpus, or its
//! sentiment degrades to 0.0) rather than aborting the whole request.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{info, warn};

use catalog::{MovieRecord, MovieSource, SeedReview, SourceError};
use models::{ContentModel, Sentiment, SentimentClassifier};
use text_pipeline::clean_text;

use crate::error::{EngineError, Result};
use crate::ranker::{self, RecommendationEntry};

/// Hybrid recommender over a configured catalog of titles.
pub struct RecommendationEngine<S: MovieSource> {
    source: S,
    catalog_titles: Vec<String>,
    sentiment_seed: Vec<SeedReview>,
}

impl<S: MovieSource> RecommendationEngine<S> {
    /// Create an engine over a movie source.
    ///
    /// # Arguments
    /// * `source` - The metadata/review collaborator
    /// * `catalog_titles` - Titles forming the recommendation corpus
    /// * `sentiment_seed` - Labeled reviews for training the classifier;
    ///   may be empty, in which case sentiment degrades to 0.0
    pub fn new(
        source: S,
        catalog_titles: Vec<String>,
        sentiment_seed: Vec<SeedReview>,
    ) -> Self {
        Self {
            source,
            catalog_titles,
            sentiment_seed,
        }
    }

    /// Main entry point: recommendations for a queried title.
    ///
    /// # Returns
    /// * `Ok(entries)` - Ranked recommendations (possibly empty when the
    ///   corpus has no candidate besides the query)
    /// * `Err(EngineError::NotFound)` - Empty query, or no corpus movie
    ///   matches the title
    /// * `Err(EngineError::SourceUnavailable)` - Nothing could be fetched
    ///   and at least one failure was transport-level
    pub fn get_recommendations(
        &self,
        query_title: &str,
        top_n: usize,
    ) -> Result<Vec<RecommendationEntry>> {
        let start_time = Instant::now();

        if query_title.trim().is_empty() {
            return Err(EngineError::NotFound {
                title: query_title.to_string(),
            });
        }

        // Fetch the corpus
        let movies = self.fetch_corpus(query_title)?;
        info!(
            "fetched metadata for {} of {} catalog titles",
            movies.len(),
            self.catalog_titles.len()
        );

        // Build the content model
        let content = ContentModel::build(&movies);

        // Unknown query: fail before spending time on sentiment
        if content.find_title(query_title).is_none() {
            return Err(EngineError::NotFound {
                title: query_title.to_string(),
            });
        }

        // Train the classifier once, then score every movie's reviews
        let classifier = self.train_classifier();
        let sentiment_scores =
            self.score_sentiment(&movies, classifier.as_ref());

        let entries =
            ranker::rank(query_title, &movies, &content, &sentiment_scores, top_n);
        info!(
            "ranked {} recommendations for \"{}\" in {:.2?}",
            entries.len(),
            query_title,
            start_time.elapsed()
        );
        Ok(entries)
    }

    /// Fetch metadata for every catalog title, isolating per-movie
    /// failures. An unfetchable corpus surfaces as `SourceUnavailable`
    /// when any failure was transport-level, `NotFound` otherwise.
    fn fetch_corpus(&self, query_title: &str) -> Result<Vec<MovieRecord>> {
        let mut movies = Vec::with_capacity(self.catalog_titles.len());
        let mut transport_failure: Option<String> = None;

        for title in &self.catalog_titles {
            match self.source.fetch_metadata(title) {
                Ok(movie) => movies.push(movie),
                Err(SourceError::NotFound { .. }) => {
                    warn!("catalog title \"{title}\" not found upstream; skipping");
                }
                Err(err) => {
                    warn!("failed to fetch \"{title}\": {err}; skipping");
                    transport_failure = Some(err.to_string());
                }
            }
        }

        if movies.is_empty() {
            return Err(match transport_failure {
                Some(reason) => EngineError::SourceUnavailable { reason },
                None => EngineError::NotFound {
                    title: query_title.to_string(),
                },
            });
        }
        Ok(movies)
    }

    /// Train a fresh classifier on the labeled seed corpus.
    ///
    /// Returns `None` (sentiment degrades to 0.0 everywhere) when the
    /// seed is empty or training fails; a bad seed never fails a request.
    fn train_classifier(&self) -> Option<SentimentClassifier> {
        if self.sentiment_seed.is_empty() {
            warn!("no labeled seed reviews; sentiment defaults to 0.0");
            return None;
        }

        let texts: Vec<String> = self
            .sentiment_seed
            .iter()
            .map(|seed| clean_text(&seed.text))
            .collect();
        let labels: Vec<Sentiment> = self
            .sentiment_seed
            .iter()
            .map(|seed| {
                if seed.positive {
                    Sentiment::Positive
                } else {
                    Sentiment::Negative
                }
            })
            .collect();

        let mut classifier = SentimentClassifier::new();
        match classifier.train(&texts, &labels) {
            Ok(report) => {
                info!(
                    "trained sentiment classifier on {} reviews \
                     (holdout accuracy {:.3})",
                    report.train_size, report.holdout_accuracy
                );
                Some(classifier)
            }
            Err(err) => {
                warn!("sentiment training failed: {err}; sentiment defaults to 0.0");
                None
            }
        }
    }

    /// Per-movie positive-sentiment ratio.
    ///
    /// A movie with no reviews, an unreachable review endpoint, or no
    /// trained classifier scores 0.0; nothing here aborts the request.
    fn score_sentiment(
        &self,
        movies: &[MovieRecord],
        classifier: Option<&SentimentClassifier>,
    ) -> HashMap<String, f64> {
        movies
            .iter()
            .map(|movie| {
                let score = match classifier {
                    None => 0.0,
                    Some(classifier) => match self.source.fetch_reviews(movie.id) {
                        Err(err) => {
                            warn!(
                                "failed to fetch reviews for \"{}\": {err}",
                                movie.title
                            );
                            0.0
                        }
                        Ok(reviews) => {
                            let cleaned: Vec<String> = reviews
                                .iter()
                                .map(|r| clean_text(&r.content))
                                .collect();
                            classifier.positive_ratio(&cleaned).unwrap_or(0.0)
                        }
                    },
                };
                (movie.title.clone(), score)
            })
            .collect()
    }
}
