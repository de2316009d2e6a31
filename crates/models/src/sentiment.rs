//! Naive Bayes sentiment classification for movie reviews.
//!
//! The classifier is an explicit two-state machine: freshly constructed it
//! is untrained and [`SentimentClassifier::predict`] fails fast with
//! [`ModelError::NotTrained`]; after [`SentimentClassifier::train`] it owns
//! exactly one vocabulary + model pair. Training again replaces the pair
//! entirely; there is no incremental update.
//!
//! Texts passed to `train` and `predict` are expected to already be
//! normalized through [`text_pipeline::clean_text`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use text_pipeline::{SparseVector, TfidfVectorizer};
use thiserror::Error;
use tracing::debug;

/// Fixed seed for the reproducible train/holdout partition.
const HOLDOUT_SEED: u64 = 42;

/// Laplace smoothing constant for the Naive Bayes likelihoods.
const SMOOTHING_ALPHA: f64 = 1.0;

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

/// Errors from the sentiment classifier.
#[derive(Error, Debug)]
pub enum ModelError {
    /// `predict` was called before `train`, a programming-contract
    /// violation, not a recoverable condition.
    #[error("sentiment model has not been trained")]
    NotTrained,

    /// Training was given no labeled reviews.
    #[error("training requires at least one labeled review")]
    EmptyTrainingSet,

    /// Texts and labels disagree in length.
    #[error("got {texts} texts but {labels} labels")]
    LabelMismatch { texts: usize, labels: usize },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Diagnostics returned by a successful training run.
///
/// Holdout accuracy never gates whether training "succeeds"; it exists
/// for logging only. An empty holdout (single-sample corpus) reports 1.0.
#[derive(Debug, Clone, Copy)]
pub struct TrainReport {
    pub train_size: usize,
    pub holdout_size: usize,
    pub holdout_accuracy: f64,
}

/// Multinomial Naive Bayes over TF-IDF weights.
///
/// Class 0 is Negative, class 1 is Positive. A class absent from the
/// training data gets a -inf prior and is never predicted.
#[derive(Debug, Clone)]
struct MultinomialNb {
    class_log_prior: [f64; 2],
    /// `feature_log_prob[feature][class]`
    feature_log_prob: Vec<[f64; 2]>,
}

impl MultinomialNb {
    fn fit(rows: &[SparseVector], classes: &[usize], n_features: usize) -> Self {
        let mut class_count = [0usize; 2];
        let mut feature_sum = vec![[0.0f64; 2]; n_features];
        for (row, &class) in rows.iter().zip(classes) {
            class_count[class] += 1;
            for (index, weight) in row.iter() {
                feature_sum[index][class] += weight;
            }
        }

        let total = rows.len() as f64;
        let mut class_log_prior = [f64::NEG_INFINITY; 2];
        let mut class_total = [0.0f64; 2];
        for f in &feature_sum {
            class_total[0] += f[0];
            class_total[1] += f[1];
        }
        for class in 0..2 {
            if class_count[class] > 0 {
                class_log_prior[class] = (class_count[class] as f64 / total).ln();
            }
        }

        let feature_log_prob = feature_sum
            .iter()
            .map(|f| {
                let mut out = [0.0f64; 2];
                for class in 0..2 {
                    out[class] = (f[class] + SMOOTHING_ALPHA).ln()
                        - (class_total[class] + SMOOTHING_ALPHA * n_features as f64)
                            .ln();
                }
                out
            })
            .collect();

        Self {
            class_log_prior,
            feature_log_prob,
        }
    }

    fn predict(&self, row: &SparseVector) -> usize {
        let mut scores = self.class_log_prior;
        for (index, weight) in row.iter() {
            let log_prob = self.feature_log_prob[index];
            scores[0] += weight * log_prob[0];
            scores[1] += weight * log_prob[1];
        }
        // Ties go to the lower class index, matching the fit convention
        if scores[1] > scores[0] { 1 } else { 0 }
    }
}

#[derive(Debug, Clone)]
struct Trained {
    vectorizer: TfidfVectorizer,
    model: MultinomialNb,
}

/// Two-phase sentiment classifier: train, then predict.
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier {
    trained: Option<Trained>,
}

impl SentimentClassifier {
    /// Create an untrained classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once `train` has completed successfully.
    pub fn is_trained(&self) -> bool {
        self.trained.is_some()
    }

    /// Train on labeled review texts.
    ///
    /// ## Algorithm
    /// 1. Shuffle indices with a fixed seed (reproducible partition)
    /// 2. Hold out `max(1, n/5)` samples when `n >= 2` (none for `n == 1`)
    /// 3. Fit a fresh TF-IDF vocabulary on the training subset only
    /// 4. Fit multinomial Naive Bayes on the training vectors
    /// 5. Score the holdout subset for the diagnostic accuracy
    ///
    /// Any previously trained vocabulary + model pair is discarded.
    pub fn train(
        &mut self,
        texts: &[String],
        labels: &[Sentiment],
    ) -> Result<TrainReport> {
        if texts.len() != labels.len() {
            return Err(ModelError::LabelMismatch {
                texts: texts.len(),
                labels: labels.len(),
            });
        }
        if texts.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let n = texts.len();
        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(HOLDOUT_SEED);
        indices.shuffle(&mut rng);

        let holdout_size = if n >= 2 { (n / 5).max(1) } else { 0 };
        let (holdout_idx, train_idx) = indices.split_at(holdout_size);

        let train_texts: Vec<String> =
            train_idx.iter().map(|&i| texts[i].clone()).collect();
        let train_classes: Vec<usize> =
            train_idx.iter().map(|&i| class_of(labels[i])).collect();

        let vectorizer = TfidfVectorizer::fit(&train_texts);
        let rows = vectorizer.transform(&train_texts);
        let model = MultinomialNb::fit(&rows, &train_classes, vectorizer.vocabulary_size());

        let correct = holdout_idx
            .iter()
            .filter(|&&i| {
                let row = vectorizer.transform_one(&texts[i]);
                model.predict(&row) == class_of(labels[i])
            })
            .count();
        let holdout_accuracy = if holdout_size == 0 {
            1.0
        } else {
            correct as f64 / holdout_size as f64
        };
        debug!(
            "trained sentiment model: {} train / {} holdout, accuracy {:.3}",
            train_idx.len(),
            holdout_size,
            holdout_accuracy
        );

        self.trained = Some(Trained { vectorizer, model });
        Ok(TrainReport {
            train_size: train_idx.len(),
            holdout_size,
            holdout_accuracy,
        })
    }

    /// Classify one review text as Positive or Negative.
    ///
    /// Fails fast with [`ModelError::NotTrained`] before any training.
    pub fn predict(&self, text: &str) -> Result<Sentiment> {
        let trained = self.trained.as_ref().ok_or(ModelError::NotTrained)?;
        let row = trained.vectorizer.transform_one(text);
        Ok(match trained.model.predict(&row) {
            1 => Sentiment::Positive,
            _ => Sentiment::Negative,
        })
    }

    /// Fraction of reviews classified Positive, in [0, 1].
    ///
    /// An empty slice yields 0.0; a movie with no reviews carries no
    /// positive-sentiment signal.
    pub fn positive_ratio(&self, reviews: &[String]) -> Result<f64> {
        if reviews.is_empty() {
            return Ok(0.0);
        }
        let mut positive = 0usize;
        for review in reviews {
            if self.predict(review)? == Sentiment::Positive {
                positive += 1;
            }
        }
        Ok(positive as f64 / reviews.len() as f64)
    }
}

fn class_of(label: Sentiment) -> usize {
    match label {
        Sentiment::Negative => 0,
        Sentiment::Positive => 1,
    }
}
