// src/graph/rank/transition.rs
//! Random-surfer transition model.

use super::graph::LinkGraph;
use crate::config::validate_damping;
use crate::error::{RankError, Result};

/// Probability of each page being visited next, in graph order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDistribution {
    probs: Vec<f64>,
}

impl TransitionDistribution {
    /// Probability at page index `idx`.
    #[must_use]
    pub fn at(&self, idx: usize) -> f64 {
        self.probs[idx]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Inverse-CDF draw for `u` in `[0, 1)`.
    ///
    /// Walks pages in graph order and returns the first whose cumulative probability
    /// exceeds `u`. When rounding leaves the running sum at or below `u`, the last page
    /// with non-zero probability is returned.
    #[must_use]
    pub fn pick(&self, u: f64) -> usize {
        let mut cumulative = 0.0;
        let mut last_live = 0;
        for (idx, &p) in self.probs.iter().enumerate() {
            cumulative += p;
            if p > 0.0 {
                last_live = idx;
            }
            if cumulative > u {
                return idx;
            }
        }
        last_live
    }
}

/// Distribution over the next page for a surfer currently on `page`.
///
/// # Errors
/// Returns `RankError::UnknownPage` if `page` is not in the graph, or an invalid
/// parameter error for a damping factor outside `(0, 1)`.
pub fn distribution(graph: &LinkGraph, page: &str, damping: f64) -> Result<TransitionDistribution> {
    validate_damping(damping)?;
    let idx = graph
        .index_of(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;
    Ok(distribution_at(graph, idx, damping))
}

/// Index-based form of [`distribution`]; inputs are assumed valid.
///
/// A sink jumps uniformly to any page. Otherwise each of its `k` links receives
/// `damping / k` and every page receives `(1 - damping) / n` on top.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn distribution_at(graph: &LinkGraph, idx: usize, damping: f64) -> TransitionDistribution {
    let n = graph.len() as f64;
    let links = graph.links(idx);

    if links.is_empty() {
        return TransitionDistribution {
            probs: vec![1.0 / n; graph.len()],
        };
    }

    let mut probs = vec![(1.0 - damping) / n; graph.len()];
    let follow = damping / links.len() as f64;
    for &target in links {
        probs[target] += follow;
    }
    TransitionDistribution { probs }
}
