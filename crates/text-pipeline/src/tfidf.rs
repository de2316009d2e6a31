//! TF-IDF feature vectorization over normalized documents.
//!
//! Documents are expected to already be normalized (see
//! [`crate::normalize::clean_text`]); tokenization here is plain
//! whitespace splitting.
//!
//! The weighting matches the smoothed scheme used by scikit-learn's
//! `TfidfVectorizer`: `idf = ln((1+N)/(1+df)) + 1`, rows L2-normalized.

use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Default cap on the number of distinct vocabulary terms.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// A sparse feature vector: sorted `(term_index, weight)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    terms: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Create an empty (all-zero) vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from unordered `(index, weight)` pairs.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by_key(|&(i, _)| i);
        Self { terms: pairs }
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.terms.len()
    }

    /// True when every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the non-zero `(index, weight)` entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.terms.iter().copied()
    }

    /// Dot product via a two-pointer merge over the sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < other.terms.len() {
            let (ai, av) = self.terms[i];
            let (bi, bv) = other.terms[j];
            match ai.cmp(&bi) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += av * bv;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> f64 {
        self.terms
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale the vector to unit L2 norm. A zero vector stays zero.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.terms {
                *w /= norm;
            }
        }
    }

    /// Cosine similarity, 0.0 when either vector is all-zero.
    ///
    /// Non-negative inputs (TF-IDF weights) keep the result in [0, 1].
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            0.0
        } else {
            self.dot(other) / denom
        }
    }
}

/// TF-IDF vectorizer with a fitted vocabulary.
///
/// One vocabulary per corpus: the content corpus and the sentiment corpus
/// each fit their own instance and never share one.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Term -> column index, indices assigned in lexicographic term order.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit a vocabulary on a corpus with the default feature cap.
    pub fn fit(documents: &[String]) -> Self {
        Self::fit_with_limit(documents, DEFAULT_MAX_FEATURES)
    }

    /// Fit a vocabulary capped at `max_features` distinct terms.
    ///
    /// Beyond the cap, the terms with the highest document frequency are
    /// retained; ties break lexicographically for determinism. An empty
    /// corpus (or all-empty documents) yields an empty vocabulary.
    pub fn fit_with_limit(documents: &[String], max_features: usize) -> Self {
        let mut df: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let seen: HashSet<&str> = doc.split_whitespace().collect();
            for term in seen {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<(&str, usize)> = df.into_iter().collect();
        if terms.len() > max_features {
            // Highest document frequency first, lexicographic on ties
            terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            terms.truncate(max_features);
        }
        // Deterministic column order regardless of hash iteration order
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, (term, count)) in terms.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), index);
            idf.push(((1.0 + n) / (1.0 + count as f64)).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    /// Fit on a corpus and transform it in one step.
    pub fn fit_transform(documents: &[String]) -> (Vec<SparseVector>, Self) {
        let vectorizer = Self::fit(documents);
        let matrix = vectorizer.transform(documents);
        (matrix, vectorizer)
    }

    /// Transform documents through the fitted vocabulary.
    ///
    /// Terms outside the vocabulary contribute nothing; an empty document
    /// becomes an all-zero vector. Documents transform in parallel.
    pub fn transform(&self, documents: &[String]) -> Vec<SparseVector> {
        documents
            .par_iter()
            .map(|doc| self.transform_one(doc))
            .collect()
    }

    /// Transform a single document into an L2-normalized TF-IDF vector.
    pub fn transform_one(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in document.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let pairs = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        let mut vector = SparseVector::from_pairs(pairs);
        vector.l2_normalize();
        vector
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Column index of a term, if it is in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let corpus = docs(&["action hero fight", "action hero battle"]);
        let vectorizer = TfidfVectorizer::fit(&corpus);
        assert_eq!(vectorizer.vocabulary_size(), 4);
        // Lexicographic column order
        assert_eq!(vectorizer.term_index("action"), Some(0));
        assert_eq!(vectorizer.term_index("battle"), Some(1));
        assert_eq!(vectorizer.term_index("fight"), Some(2));
        assert_eq!(vectorizer.term_index("hero"), Some(3));
    }

    #[test]
    fn test_single_term_document_has_unit_weight() {
        let corpus = docs(&["apple"]);
        let (matrix, _) = TfidfVectorizer::fit_transform(&corpus);
        assert_eq!(matrix.len(), 1);
        let entries: Vec<_> = matrix[0].iter().collect();
        assert_eq!(entries.len(), 1);
        assert!((entries[0].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let corpus = docs(&["action hero fight", "romance drama love"]);
        let (matrix, _) = TfidfVectorizer::fit_transform(&corpus);
        for row in &matrix {
            assert!((row.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_document_yields_zero_vector() {
        let corpus = docs(&["action hero", "", "drama"]);
        let (matrix, _) = TfidfVectorizer::fit_transform(&corpus);
        assert_eq!(matrix.len(), 3);
        assert!(matrix[1].is_zero());
        assert_eq!(matrix[1].norm(), 0.0);
    }

    #[test]
    fn test_empty_corpus_yields_zero_columns() {
        let (matrix, vectorizer) = TfidfVectorizer::fit_transform(&[]);
        assert!(matrix.is_empty());
        assert_eq!(vectorizer.vocabulary_size(), 0);

        let all_empty = docs(&["", ""]);
        let (matrix, vectorizer) = TfidfVectorizer::fit_transform(&all_empty);
        assert_eq!(vectorizer.vocabulary_size(), 0);
        assert!(matrix.iter().all(SparseVector::is_zero));
    }

    #[test]
    fn test_transform_ignores_unseen_terms() {
        let corpus = docs(&["action hero"]);
        let vectorizer = TfidfVectorizer::fit(&corpus);
        let unseen = vectorizer.transform(&docs(&["zombie apocalypse"]));
        assert!(unseen[0].is_zero());

        let mixed = vectorizer.transform(&docs(&["action zombie"]));
        assert_eq!(mixed[0].nnz(), 1);
    }

    #[test]
    fn test_feature_cap_keeps_highest_document_frequency() {
        // "common" appears in every document; the rest in one each
        let corpus = docs(&["common alpha", "common beta", "common gamma"]);
        let vectorizer = TfidfVectorizer::fit_with_limit(&corpus, 2);
        assert_eq!(vectorizer.vocabulary_size(), 2);
        assert!(vectorizer.term_index("common").is_some());
        // df tie among alpha/beta/gamma breaks lexicographically
        assert!(vectorizer.term_index("alpha").is_some());
        assert!(vectorizer.term_index("beta").is_none());
        assert!(vectorizer.term_index("gamma").is_none());
    }

    #[test]
    fn test_cosine_of_identical_documents_is_one() {
        let corpus = docs(&["action hero fight", "action hero fight"]);
        let (matrix, _) = TfidfVectorizer::fit_transform(&corpus);
        assert!((matrix[0].cosine(&matrix[1]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_of_disjoint_documents_is_zero() {
        let corpus = docs(&["action hero", "romance drama"]);
        let (matrix, _) = TfidfVectorizer::fit_transform(&corpus);
        assert_eq!(matrix[0].cosine(&matrix[1]), 0.0);
    }

    #[test]
    fn test_cosine_with_zero_vector_is_zero() {
        let corpus = docs(&["action hero", ""]);
        let (matrix, _) = TfidfVectorizer::fit_transform(&corpus);
        assert_eq!(matrix[0].cosine(&matrix[1]), 0.0);
    }

    #[test]
    fn test_overlapping_documents_score_between_zero_and_one() {
        let corpus = docs(&["action hero fight", "action hero battle"]);
        let (matrix, _) = TfidfVectorizer::fit_transform(&corpus);
        let sim = matrix[0].cosine(&matrix[1]);
        assert!(sim > 0.0 && sim < 1.0);
    }

    #[test]
    fn test_sparse_dot_merges_sorted_indices() {
        let a = SparseVector::from_pairs(vec![(3, 2.0), (0, 1.0), (7, 4.0)]);
        let b = SparseVector::from_pairs(vec![(3, 0.5), (8, 1.0), (0, 2.0)]);
        assert_eq!(a.dot(&b), 1.0 * 2.0 + 2.0 * 0.5);
    }
}
