pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod reporting;

pub use config::RankParams;
pub use error::{RankError, Result};
pub use graph::rank::{
    distribution, IterationReport, LinkGraph, RankComparison, RankEngine, RankMapping,
    TransitionDistribution,
};
