// src/graph/rank/mod.rs
pub mod builder;
pub mod graph;
pub mod mapping;
pub mod pagerank;
pub mod sampler;
pub mod transition;

pub use graph::LinkGraph;
pub use mapping::RankMapping;
pub use pagerank::IterationReport;
pub use transition::{distribution, TransitionDistribution};

use crate::config::RankParams;
use crate::error::Result;

/// Both estimates for one graph.
#[derive(Debug, Clone)]
pub struct RankComparison {
    pub sampled: RankMapping,
    pub iterated: RankMapping,
}

impl RankComparison {
    /// Largest per-page disagreement between the two estimates.
    #[must_use]
    pub fn max_deviation(&self) -> f64 {
        self.sampled.max_deviation(&self.iterated)
    }
}

/// Orchestrates validation and both estimators.
pub struct RankEngine;

impl RankEngine {
    /// Validates `params` and runs the sampler and the iterative solver side by side.
    ///
    /// The two share nothing but the read-only graph.
    ///
    /// # Errors
    /// Returns the parameter error before any work starts, or the first estimator error.
    pub fn run(graph: &LinkGraph, params: &RankParams) -> Result<RankComparison> {
        params.validate()?;
        tracing::debug!(
            pages = graph.len(),
            links = graph.edge_count(),
            sinks = graph.sinks().count(),
            "ranking graph"
        );

        let (sampled, iterated) = rayon::join(
            || sampler::estimate(graph, params),
            || pagerank::estimate(graph, params),
        );

        Ok(RankComparison {
            sampled: sampled?,
            iterated: iterated?,
        })
    }
}
