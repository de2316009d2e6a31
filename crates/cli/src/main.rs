use anyhow::{Context, Result};
use catalog::{CatalogFile, InMemorySource};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{DEFAULT_TOP_N, EngineError, RecommendationEngine};
use std::path::PathBuf;
use std::time::Instant;

/// CineRecs - Hybrid Movie Recommender
#[derive(Parser)]
#[command(name = "cine-recs")]
#[command(
    about = "Movie recommendations from content similarity and review sentiment",
    long_about = None
)]
struct Cli {
    /// Path to the JSON catalog file
    #[arg(short, long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations for a movie title
    Recommend {
        /// Movie title to find recommendations for (case-insensitive)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List all catalog titles
    Movies,

    /// Search catalog titles by substring
    Search {
        /// Substring to search for (case-insensitive)
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog_file = catalog::load_catalog(&cli.catalog).with_context(|| {
        format!("Failed to load catalog from {}", cli.catalog.display())
    })?;
    println!(
        "{} Loaded {} movies from {} in {:?}",
        "✓".green(),
        catalog_file.movies.len(),
        cli.catalog.display(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend { title, top_n, json } => {
            handle_recommend(catalog_file, &title, top_n, json)
        }
        Commands::Movies => handle_movies(catalog_file),
        Commands::Search { title } => handle_search(catalog_file, &title),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog_file: CatalogFile,
    title: &str,
    top_n: usize,
    json: bool,
) -> Result<()> {
    let seed = catalog_file.sentiment_seed.clone();
    let source = InMemorySource::from_catalog(catalog_file);
    let titles = source.titles();
    let engine = RecommendationEngine::new(source, titles, seed);

    let entries = match engine.get_recommendations(title, top_n) {
        Ok(entries) => entries,
        Err(err @ EngineError::NotFound { .. }) => {
            // Expected outcome, rendered distinctly from real failures
            println!("{} {}", "✗".yellow(), err.to_string().yellow());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No candidates to recommend for \"{title}\".");
        return Ok(());
    }

    println!("\nRecommendations for {}:\n", title.bold());
    println!(
        "{:<4} {:<30} {:>10} {:>10} {:>10}",
        "#", "Title", "Similar", "Sentiment", "Score"
    );
    for (rank, entry) in entries.iter().enumerate() {
        println!(
            "{:<4} {:<30} {:>10.3} {:>10.3} {:>10}",
            rank + 1,
            entry.title.bold(),
            entry.similarity,
            entry.positive_sentiment,
            format!("{:.3}", entry.final_score).green()
        );
    }
    Ok(())
}

/// Handle the 'movies' command
fn handle_movies(catalog_file: CatalogFile) -> Result<()> {
    for movie in &catalog_file.movies {
        let genres = movie.genres.join(", ");
        println!("{:<6} {:<30} {}", movie.id, movie.title.bold(), genres);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog_file: CatalogFile, query: &str) -> Result<()> {
    let needle = query.to_lowercase();
    let mut matched = 0;
    for movie in &catalog_file.movies {
        if movie.title.to_lowercase().contains(&needle) {
            println!("{:<6} {}", movie.id, movie.title.bold());
            matched += 1;
        }
    }
    if matched == 0 {
        println!("No titles matching \"{query}\".");
    }
    Ok(())
}
