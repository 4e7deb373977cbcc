// src/graph/rank/mapping.rs
//! The rank result produced by each estimator.

use std::collections::BTreeMap;

use serde::Serialize;

use super::graph::LinkGraph;

/// Estimated `PageRank` per page. Covers exactly the pages of the graph it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankMapping {
    ranks: BTreeMap<String, f64>,
}

impl RankMapping {
    /// Pairs `values` (in graph order) with the graph's page names.
    #[must_use]
    pub(crate) fn from_values(graph: &LinkGraph, values: &[f64]) -> Self {
        debug_assert_eq!(graph.len(), values.len());
        let ranks = graph
            .pages()
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect();
        Self { ranks }
    }

    /// Uniform mapping over the graph's pages.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(graph: &LinkGraph) -> Self {
        let share = 1.0 / graph.len() as f64;
        Self::from_values(graph, &vec![share; graph.len()])
    }

    #[must_use]
    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Pages and ranks, in page-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(p, r)| (p.as_str(), *r))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Ranks ordered from most to least important. Ties keep page-name order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// Largest absolute per-page difference to `other`. Pages missing on one side count in full.
    #[must_use]
    pub fn max_deviation(&self, other: &RankMapping) -> f64 {
        let mut worst: f64 = 0.0;
        for (page, rank) in self.iter() {
            worst = worst.max((rank - other.get(page).unwrap_or(0.0)).abs());
        }
        for (page, rank) in other.iter() {
            if !self.ranks.contains_key(page) {
                worst = worst.max(rank.abs());
            }
        }
        worst
    }

    /// Values aligned with `graph`'s page order; pages absent from the mapping read as zero.
    #[must_use]
    pub(crate) fn values_for(&self, graph: &LinkGraph) -> Vec<f64> {
        graph
            .pages()
            .iter()
            .map(|p| self.get(p).unwrap_or(0.0))
            .collect()
    }
}
