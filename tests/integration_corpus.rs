// tests/integration_corpus.rs
//! Crawling a corpus directory and resolving configuration.

use clap::Parser;
use linkrank_core::cli::{handlers, Cli};
use linkrank_core::discovery;
use linkrank_core::error::GraphError;
use linkrank_core::{RankEngine, RankError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn corpus() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "1.html", r#"<a href="2.html">Two</a>"#);
    write(
        d.path(),
        "2.html",
        r#"<a href="1.html">One</a> <a href="3.html">Three</a> <a href="2.html">Self</a>"#,
    );
    write(
        d.path(),
        "3.html",
        r#"<a href="2.html">Two</a><a href="4.html">Four</a><a href="missing.html">?</a>"#,
    );
    write(d.path(), "4.html", r#"<a  class="nav" href="2.html">Two</a>"#);
    write(d.path(), "notes.txt", r#"<a href="1.html">ignored</a>"#);
    d
}

#[test]
fn test_crawl_builds_closed_graph() {
    let d = corpus();
    let g = discovery::crawl(d.path()).unwrap();
    assert_eq!(g.pages(), ["1.html", "2.html", "3.html", "4.html"]);
    assert_eq!(g.links_of("2.html"), Some(vec!["1.html", "3.html"]));
    assert_eq!(g.links_of("3.html"), Some(vec!["2.html", "4.html"]));
    assert_eq!(g.links_of("4.html"), Some(vec!["2.html"]));
}

#[test]
fn test_crawl_skips_subdirectories() {
    let d = corpus();
    fs::create_dir(d.path().join("nested")).unwrap();
    write(&d.path().join("nested"), "5.html", r#"<a href="1.html">x</a>"#);
    let g = discovery::crawl(d.path()).unwrap();
    assert!(!g.contains("5.html"));
}

#[test]
fn test_crawl_empty_dir() {
    let d = tempfile::tempdir().unwrap();
    let err = discovery::crawl(d.path()).unwrap_err();
    assert!(matches!(err, RankError::InvalidGraph(GraphError::Empty)));
}

#[test]
fn test_crawl_missing_dir() {
    let d = tempfile::tempdir().unwrap();
    assert!(discovery::crawl(&d.path().join("nope")).is_err());
}

#[test]
fn test_crawled_corpus_ranks() {
    let d = corpus();
    let g = discovery::crawl(d.path()).unwrap();
    let params = linkrank_core::RankParams::new().with_seed(1);
    let result = RankEngine::run(&g, &params).unwrap();
    let top = result.iterated.ranked()[0].0;
    assert_eq!(top, "2.html");
}

#[test]
fn test_config_file_and_flags() {
    let d = corpus();
    let cfg = d.path().join("linkrank.toml");
    fs::write(&cfg, "[rank]\ndamping = 0.6\nsamples = 300\n").unwrap();
    let corpus_arg = d.path().to_string_lossy().into_owned();
    let cfg_arg = cfg.to_string_lossy().into_owned();

    let cli = Cli::try_parse_from(["linkrank", &corpus_arg, "--config", &cfg_arg, "-n", "700"]).unwrap();
    let params = handlers::resolve_params(&cli).unwrap();
    assert!((params.damping - 0.6).abs() < f64::EPSILON);
    assert_eq!(params.samples, 700);
}

#[test]
fn test_invalid_flag_value_rejected() {
    let d = corpus();
    let corpus_arg = d.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["linkrank", &corpus_arg, "--damping", "1.5"]).unwrap();
    assert!(handlers::resolve_params(&cli).is_err());
}

#[test]
fn test_missing_config_file_is_error() {
    let d = corpus();
    let corpus_arg = d.path().to_string_lossy().into_owned();
    let missing = d.path().join("absent.toml").to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["linkrank", &corpus_arg, "--config", &missing]).unwrap();
    assert!(handlers::resolve_params(&cli).is_err());
}
