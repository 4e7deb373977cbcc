// src/reporting.rs
//! Console and JSON output for a pair of rank estimates.

use crate::config::RankParams;
use crate::graph::rank::{RankComparison, RankMapping};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    damping: f64,
    samples: usize,
    threshold: f64,
    sampling: &'a RankMapping,
    iteration: &'a RankMapping,
    max_deviation: f64,
}

/// Prints both estimates as two page-sorted blocks.
pub fn print_report(result: &RankComparison, params: &RankParams) {
    println!(
        "{}",
        format!("PageRank Results from Sampling (n = {})", params.samples).bold()
    );
    print!("{}", format_ranks(&result.sampled));
    println!("{}", "PageRank Results from Iteration".bold());
    print!("{}", format_ranks(&result.iterated));
}

/// Prints both estimates as one JSON object.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(result: &RankComparison, params: &RankParams) -> Result<()> {
    println!("{}", render_json(result, params)?);
    Ok(())
}

/// # Errors
/// Returns error if serialization fails.
pub fn render_json(result: &RankComparison, params: &RankParams) -> Result<String> {
    let report = JsonReport {
        damping: params.damping,
        samples: params.samples,
        threshold: params.threshold,
        sampling: &result.sampled,
        iteration: &result.iterated,
        max_deviation: result.max_deviation(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// One `  page: 0.1234` line per page, in page-name order.
#[must_use]
pub fn format_ranks(ranks: &RankMapping) -> String {
    let mut out = String::new();
    for (page, rank) in ranks.iter() {
        let _ = writeln!(out, "  {page}: {rank:.4}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::rank::LinkGraph;

    fn comparison() -> RankComparison {
        let g = LinkGraph::from_links([("2.html", vec!["1.html"]), ("1.html", vec!["2.html"])]).unwrap();
        RankComparison {
            sampled: RankMapping::uniform(&g),
            iterated: RankMapping::uniform(&g),
        }
    }

    #[test]
    fn test_format_sorted_by_page() {
        let text = format_ranks(&comparison().sampled);
        assert_eq!(text, "  1.html: 0.5000\n  2.html: 0.5000\n");
    }

    #[test]
    fn test_json_shape() {
        let json = render_json(&comparison(), &RankParams::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["samples"], 10_000);
        assert_eq!(value["sampling"]["1.html"], 0.5);
        assert_eq!(value["iteration"]["2.html"], 0.5);
        assert_eq!(value["max_deviation"], 0.0);
    }
}
