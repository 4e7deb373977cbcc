// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::config::RankParams;
use crate::discovery;
use crate::exit::LinkRankExit;
use crate::graph::rank::RankEngine;
use crate::reporting;
use anyhow::{Context, Result};

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolves parameters: defaults, then the config file, then command-line flags.
///
/// # Errors
/// Returns error if the config file cannot be read or a parameter is invalid.
pub fn resolve_params(cli: &Cli) -> Result<RankParams> {
    let mut params = RankParams::load(cli.config.as_deref()).context("Failed to load config")?;
    params.apply_overrides(&cli.overrides());
    params.validate()?;
    Ok(params)
}

/// Crawls the corpus, runs both estimators and prints the results.
///
/// # Errors
/// Returns error if configuration, crawling or ranking fails.
pub fn handle_rank(cli: &Cli) -> Result<LinkRankExit> {
    let params = resolve_params(cli)?;
    let graph = discovery::crawl(&cli.corpus)
        .with_context(|| format!("Failed to crawl {}", cli.corpus.display()))?;

    let result = RankEngine::run(&graph, &params)?;
    tracing::info!(max_deviation = result.max_deviation(), "estimates compared");

    if cli.json {
        reporting::print_json(&result, &params)?;
    } else {
        reporting::print_report(&result, &params);
    }
    Ok(LinkRankExit::Success)
}
