use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsift::{Corpus, LocalSearch, SearchConfig, SearchResult};

mod cli;
use cli::{display, Cli, Commands};

/// Log filter variable, e.g. `DOCSIFT_LOG=docsift=debug`.
const LOG_ENV: &str = "DOCSIFT_LOG";

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            docs,
            query,
            limit,
            json,
        } => {
            let corpus = load_corpus(&docs)?;
            let engine = LocalSearch::new().with_policy(config.query_policy());
            let limit = limit.unwrap_or(config.default_limit);

            let start = Instant::now();
            let results = engine.search(&query, &corpus, Some(limit));
            let elapsed = start.elapsed();

            emit(json, "SEARCH", &query, &results, elapsed)?;
        }
        Commands::Inspect { docs } => {
            let corpus = load_corpus(&docs)?;
            display::print_index(corpus.index());
        }
        #[cfg(feature = "remote")]
        Commands::Remote {
            endpoint,
            query,
            limit,
            json,
        } => {
            let limit = limit.unwrap_or(config.default_limit);
            let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
            let client = docsift::SearchClient::from_config(&config).context("failed to build search client")?;

            let start = Instant::now();
            let results = runtime
                .block_on(client.search(&endpoint, &query, limit))
                .with_context(|| format!("remote search against {endpoint} failed"))?;
            let elapsed = start.elapsed();

            emit(json, "REMOTE", &query, &results, elapsed)?;
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::load_from(path).with_context(|| format!("failed to load {}", path.display())),
        None => SearchConfig::load().context("failed to read configuration"),
    }
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    Corpus::load(path).with_context(|| format!("failed to load documents from {}", path.display()))
}

fn emit(json: bool, label: &str, query: &str, results: &[SearchResult], elapsed: std::time::Duration) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(results).context("failed to serialize results")?;
        println!("{out}");
    } else {
        display::print_results(label, query, results, elapsed);
    }
    Ok(())
}
