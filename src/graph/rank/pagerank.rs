// src/graph/rank/pagerank.rs
//! Iterative `PageRank`: applies the damped update to every page until no page moves.

use rayon::prelude::*;

use super::graph::LinkGraph;
use super::mapping::RankMapping;
use crate::config::{validate_damping, validate_threshold, RankParams};
use crate::error::{RankError, Result};

/// Passes without a new smallest change after which the solver stops at machine precision.
const STALL_PASSES: usize = 16;

/// Result of an iterative run.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub ranks: RankMapping,
    /// Full update passes performed, including the final one.
    pub passes: usize,
    /// True when the run stopped because floating point could not get closer, not because
    /// the change fell below the threshold.
    pub precision_limited: bool,
}

/// Who links to whom. Sinks link to every page (themselves included), so rather than
/// appearing in every incoming list they feed one shared term per pass.
struct ReverseAdjacency {
    /// `incoming[p]` lists every non-sink `q` that links to `p`.
    incoming: Vec<Vec<usize>>,
    /// Size of each page's effective outbound set; `n` for sinks.
    out_degree: Vec<usize>,
    sinks: Vec<usize>,
}

impl ReverseAdjacency {
    fn build(graph: &LinkGraph) -> Self {
        let n = graph.len();
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut out_degree = Vec::with_capacity(n);
        let mut sinks = Vec::new();

        for q in 0..n {
            if graph.is_sink(q) {
                sinks.push(q);
                out_degree.push(n);
            } else {
                for &p in graph.links(q) {
                    incoming[p].push(q);
                }
                out_degree.push(graph.links(q).len());
            }
        }

        Self {
            incoming,
            out_degree,
            sinks,
        }
    }

    /// Rank every page receives from the sinks: `sum(ranks[sink]) / n`.
    #[allow(clippy::cast_precision_loss)]
    fn sink_share(&self, ranks: &[f64]) -> f64 {
        let held: f64 = self.sinks.iter().map(|&q| ranks[q]).sum();
        held / ranks.len() as f64
    }
}

/// Computes ranks starting from the uniform distribution.
///
/// # Errors
/// Returns an invalid parameter error for a bad damping factor or threshold, or
/// `RankError::NonFinite` if a pass produces NaN or infinity.
pub fn estimate(graph: &LinkGraph, params: &RankParams) -> Result<RankMapping> {
    estimate_from(graph, params, &RankMapping::uniform(graph)).map(|r| r.ranks)
}

/// Computes ranks starting from `initial`. Pages missing from `initial` start at zero.
///
/// # Errors
/// Same as [`estimate`].
#[allow(clippy::cast_precision_loss)]
pub fn estimate_from(
    graph: &LinkGraph,
    params: &RankParams,
    initial: &RankMapping,
) -> Result<IterationReport> {
    validate_damping(params.damping)?;
    validate_threshold(params.threshold)?;

    let reverse = ReverseAdjacency::build(graph);
    let teleport = (1.0 - params.damping) / graph.len() as f64;
    let mut ranks = initial.values_for(graph);
    let mut passes = 0;
    let mut best = f64::INFINITY;
    let mut stalled = 0;

    loop {
        passes += 1;
        let next = iterate_once(&ranks, &reverse, params.damping, teleport);
        check_finite(graph, &next, passes)?;

        let delta = max_delta(&ranks, &next);
        tracing::debug!(pass = passes, delta, "pagerank pass");

        if delta < best {
            best = delta;
            stalled = 0;
        } else {
            stalled += 1;
        }

        // An exact fixed point has delta 0 and meets any positive threshold.
        let precision_limited = delta >= params.threshold && stalled >= STALL_PASSES;
        if delta < params.threshold || precision_limited {
            tracing::info!(pages = graph.len(), passes, delta, precision_limited, "pagerank converged");
            return Ok(IterationReport {
                ranks: RankMapping::from_values(graph, &next),
                passes,
                precision_limited,
            });
        }
        ranks = next;
    }
}

/// One synchronous pass. Reads only `ranks`; writes a fresh vector.
fn iterate_once(ranks: &[f64], reverse: &ReverseAdjacency, damping: f64, teleport: f64) -> Vec<f64> {
    let shared = reverse.sink_share(ranks);
    reverse
        .incoming
        .par_iter()
        .map(|sources| {
            teleport + damping * (incoming_rank(sources, ranks, &reverse.out_degree) + shared)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn incoming_rank(sources: &[usize], ranks: &[f64], out_degree: &[usize]) -> f64 {
    sources
        .iter()
        .map(|&q| ranks[q] / out_degree[q] as f64)
        .sum()
}

fn max_delta(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

fn check_finite(graph: &LinkGraph, values: &[f64], pass: usize) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(RankError::NonFinite {
            page: graph.page(idx).to_string(),
            value: values[idx],
            pass,
        }),
        None => Ok(()),
    }
}
