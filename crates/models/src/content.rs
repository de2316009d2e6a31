//! Content-based similarity over movie metadata.
//!
//! A [`ContentModel`] is built fresh per request: every movie's
//! bag-of-words document is normalized, one TF-IDF vocabulary is fit over
//! the whole corpus, and one vector per movie is kept in corpus order.

use catalog::MovieRecord;
use text_pipeline::{SparseVector, TfidfVectorizer, clean_text};
use tracing::debug;

/// TF-IDF content model over a movie corpus.
#[derive(Debug, Clone)]
pub struct ContentModel {
    titles: Vec<String>,
    vectors: Vec<SparseVector>,
}

impl ContentModel {
    /// Fit one TF-IDF vocabulary over all movies' bag-of-words documents.
    ///
    /// Movies with no textual metadata get an all-zero vector; they never
    /// crash the build and simply score 0.0 against everything.
    pub fn build(movies: &[MovieRecord]) -> Self {
        let documents: Vec<String> = movies
            .iter()
            .map(|m| clean_text(&m.bag_of_words()))
            .collect();
        let (vectors, vectorizer) = TfidfVectorizer::fit_transform(&documents);
        debug!(
            "built content model: {} movies, {} vocabulary terms",
            movies.len(),
            vectorizer.vocabulary_size()
        );
        Self {
            titles: movies.iter().map(|m| m.title.clone()).collect(),
            vectors,
        }
    }

    /// Number of movies in the corpus.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// True when the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Locate a movie by title, case-insensitively.
    ///
    /// Returns the first match when duplicate titles exist, `None` when
    /// the title is unknown.
    pub fn find_title(&self, query_title: &str) -> Option<usize> {
        self.titles
            .iter()
            .position(|t| t.eq_ignore_ascii_case(query_title))
    }

    /// Cosine similarity of movie `index` against every corpus vector,
    /// in corpus order and full precision. Values lie in [0, 1].
    pub fn similarity_row(&self, index: usize) -> Vec<f64> {
        let query = &self.vectors[index];
        self.vectors.iter().map(|v| query.cosine(v)).collect()
    }

    /// Titles similar to `query_title`, best first, query excluded.
    ///
    /// An unknown title yields an empty vec; that is the "unknown movie"
    /// signal, not an error.
    pub fn similar_to(&self, query_title: &str) -> Vec<(String, f64)> {
        let Some(index) = self.find_title(query_title) else {
            return Vec::new();
        };
        let row = self.similarity_row(index);
        let mut scored: Vec<(String, f64)> = row
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(i, score)| (self.titles[i].clone(), score))
            .collect();
        // Stable: equal scores keep corpus order
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str, overview: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            genres: vec![],
            overview: overview.to_string(),
            keywords: vec![],
            cast: vec![],
        }
    }

    fn corpus() -> Vec<MovieRecord> {
        vec![
            movie(1, "A", "action hero fight"),
            movie(2, "B", "action hero battle"),
            movie(3, "C", "romance drama love"),
        ]
    }

    #[test]
    fn test_find_title_is_case_insensitive() {
        let model = ContentModel::build(&corpus());
        assert_eq!(model.find_title("a"), Some(0));
        assert_eq!(model.find_title("B"), Some(1));
        assert_eq!(model.find_title("Nonexistent Movie XYZ"), None);
    }

    #[test]
    fn test_similar_to_excludes_query_movie() {
        let model = ContentModel::build(&corpus());
        let similar = model.similar_to("A");
        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|(title, _)| title != "A"));
    }

    #[test]
    fn test_similar_to_ranks_by_shared_vocabulary() {
        let model = ContentModel::build(&corpus());
        let similar = model.similar_to("A");
        // B shares "action hero" with A; C shares nothing
        assert_eq!(similar[0].0, "B");
        assert!(similar[0].1 > similar[1].1);
        assert_eq!(similar[1].1, 0.0);
    }

    #[test]
    fn test_similarity_row_is_in_unit_range() {
        let model = ContentModel::build(&corpus());
        for score in model.similarity_row(0) {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_unknown_title_yields_empty_result() {
        let model = ContentModel::build(&corpus());
        assert!(model.similar_to("Nonexistent Movie XYZ").is_empty());
    }

    #[test]
    fn test_movie_without_metadata_gets_zero_vector() {
        let mut movies = corpus();
        movies.push(movie(4, "D", ""));
        let model = ContentModel::build(&movies);
        let row = model.similarity_row(3);
        assert!(row.iter().take(3).all(|&s| s == 0.0));
    }

    #[test]
    fn test_duplicate_titles_take_first_match() {
        let movies = vec![
            movie(1, "Twin", "action"),
            movie(2, "twin", "romance"),
        ];
        let model = ContentModel::build(&movies);
        assert_eq!(model.find_title("TWIN"), Some(0));
    }
}
