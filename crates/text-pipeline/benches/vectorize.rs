//! Benchmarks for text normalization and TF-IDF fitting.
//!
//! Run with: cargo bench -p text-pipeline

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use text_pipeline::{TfidfVectorizer, clean_text};

fn synthetic_corpus(n_docs: usize) -> Vec<String> {
    let words = [
        "action", "hero", "fight", "battle", "romance", "drama", "love",
        "space", "dream", "heist", "city", "crime", "family", "war",
        "journey", "revenge", "mystery", "detective", "future", "past",
    ];
    (0..n_docs)
        .map(|i| {
            (0..40)
                .map(|j| words[(i * 7 + j * 3) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_clean_text(c: &mut Criterion) {
    let raw = "The heroes were RUNNING through the city, fighting 100 \
               battles and making impossible choices!";
    c.bench_function("clean_text/review", |b| {
        b.iter(|| clean_text(black_box(raw)))
    });
}

fn bench_fit_transform(c: &mut Criterion) {
    let corpus = synthetic_corpus(200);
    c.bench_function("tfidf/fit_transform_200_docs", |b| {
        b.iter(|| TfidfVectorizer::fit_transform(black_box(&corpus)))
    });
}

criterion_group!(benches, bench_clean_text, bench_fit_transform);
criterion_main!(benches);
