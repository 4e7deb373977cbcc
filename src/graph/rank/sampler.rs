// src/graph/rank/sampler.rs
//! Monte-Carlo `PageRank`: a random surfer's visit frequencies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::graph::LinkGraph;
use super::mapping::RankMapping;
use super::transition::distribution_at;
use crate::config::{validate_damping, validate_samples, RankParams};
use crate::error::Result;

/// Estimates ranks by walking `params.samples` steps.
///
/// Seeded from `params.seed` when set, otherwise from OS entropy.
///
/// # Errors
/// Returns an invalid parameter error for a bad damping factor or a zero sample count.
pub fn estimate(graph: &LinkGraph, params: &RankParams) -> Result<RankMapping> {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    estimate_with_rng(graph, params.damping, params.samples, &mut rng)
}

/// Estimates ranks with a caller-supplied random stream.
///
/// The start page is drawn uniformly and is not counted; each of the `samples`
/// steps counts the page it lands on.
///
/// # Errors
/// Returns an invalid parameter error for a bad damping factor or a zero sample count.
#[allow(clippy::cast_precision_loss)]
pub fn estimate_with_rng<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankMapping> {
    validate_damping(damping)?;
    validate_samples(samples)?;

    let mut visits = vec![0usize; graph.len()];
    let mut current = rng.random_range(0..graph.len());

    for _ in 0..samples {
        let dist = distribution_at(graph, current, damping);
        current = dist.pick(rng.random::<f64>());
        visits[current] += 1;
    }

    let n = samples as f64;
    let values: Vec<f64> = visits.iter().map(|&c| c as f64 / n).collect();
    tracing::info!(pages = graph.len(), samples, "sampling finished");
    Ok(RankMapping::from_values(graph, &values))
}
