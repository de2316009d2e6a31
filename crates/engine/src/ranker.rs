//! Hybrid ranking: blend content similarity with review sentiment.
//!
//! The final score is a convex combination of two [0, 1] signals,
//! `0.7 * similarity + 0.3 * sentiment`, so it stays in [0, 1] by
//! construction. Sorting is stable: tied scores preserve the original
//! corpus order.

use catalog::MovieRecord;
use models::ContentModel;
use serde::Serialize;
use std::collections::HashMap;

/// Weight of the content-similarity signal in the final score.
pub const SIMILARITY_WEIGHT: f64 = 0.7;

/// Weight of the positive-sentiment signal in the final score.
pub const SENTIMENT_WEIGHT: f64 = 0.3;

/// Default number of recommendations returned.
pub const DEFAULT_TOP_N: usize = 5;

/// One ranked recommendation.
///
/// Scores are rounded to 3 decimals here at the output edge; ranking
/// itself happens at full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationEntry {
    pub title: String,
    pub similarity: f64,
    pub positive_sentiment: f64,
    pub final_score: f64,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Rank every movie other than the query by blended score.
///
/// `movies` must be the same slice (same order) the content model was
/// built from. A sentiment entry missing from `sentiment_scores` defaults
/// to 0.0; that is not an error. An unknown query title yields an empty
/// vec, as does a corpus with no candidate besides the query.
pub fn rank(
    query_title: &str,
    movies: &[MovieRecord],
    content: &ContentModel,
    sentiment_scores: &HashMap<String, f64>,
    top_n: usize,
) -> Vec<RecommendationEntry> {
    let Some(query_index) = content.find_title(query_title) else {
        return Vec::new();
    };
    let similarities = content.similarity_row(query_index);

    let mut scored: Vec<(String, f64, f64, f64)> = movies
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != query_index)
        .map(|(i, movie)| {
            let similarity = similarities[i];
            let sentiment = sentiment_scores
                .get(&movie.title)
                .copied()
                .unwrap_or(0.0);
            let final_score =
                SIMILARITY_WEIGHT * similarity + SENTIMENT_WEIGHT * sentiment;
            (movie.title.clone(), similarity, sentiment, final_score)
        })
        .collect();

    // Stable descending sort, then truncate before rounding
    scored.sort_by(|a, b| {
        b.3.partial_cmp(&a.3).unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);

    scored
        .into_iter()
        .map(|(title, similarity, sentiment, final_score)| {
            RecommendationEntry {
                title,
                similarity: round3(similarity),
                positive_sentiment: round3(sentiment),
                final_score: round3(final_score),
            }
        })
        .collect()
}
