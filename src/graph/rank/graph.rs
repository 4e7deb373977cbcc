// src/graph/rank/graph.rs
//! The link graph consumed by both rank estimators.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{GraphError, Result};

/// An immutable, closed-world directed graph of pages.
///
/// Pages are held in ascending identifier order and addressed by index.
/// That order is the one every order-sensitive walk uses, so two runs over the same
/// graph visit pages identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph {
    pages: Vec<String>,
    index: HashMap<String, usize>,
    /// Outbound links per page, as sorted page indices.
    links: Vec<Vec<usize>>,
}

impl LinkGraph {
    /// Builds a graph from `(page, outbound links)` pairs.
    ///
    /// Duplicate pages have their link sets merged.
    ///
    /// # Errors
    /// Returns `GraphError::Empty` if there are no pages, `GraphError::UnknownLink`
    /// if a target is not itself a page, and `GraphError::SelfLink` if a page links to itself.
    pub fn from_links<I, K, L, T>(pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in pages {
            raw.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }
        Self::from_map(raw)
    }

    fn from_map(raw: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        if raw.is_empty() {
            return Err(GraphError::Empty.into());
        }

        let pages: Vec<String> = raw.keys().cloned().collect();
        let index: HashMap<String, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        let mut links = Vec::with_capacity(pages.len());
        for (page, targets) in &raw {
            links.push(resolve_targets(page, targets, &index)?);
        }

        Ok(Self { pages, index, links })
    }

    /// Number of pages. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false: construction rejects empty graphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page identifiers in graph order.
    #[must_use]
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Page identifier at `idx`. `idx` must come from this graph.
    #[must_use]
    pub(crate) fn page(&self, idx: usize) -> &str {
        &self.pages[idx]
    }

    #[must_use]
    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    /// Outbound links of the page at `idx`, as indices in graph order.
    #[must_use]
    pub(crate) fn links(&self, idx: usize) -> &[usize] {
        &self.links[idx]
    }

    /// Outbound links of `page` by name, or `None` for an unknown page.
    #[must_use]
    pub fn links_of(&self, page: &str) -> Option<Vec<&str>> {
        let idx = self.index_of(page)?;
        Some(self.links[idx].iter().map(|&t| self.page(t)).collect())
    }

    #[must_use]
    pub(crate) fn is_sink(&self, idx: usize) -> bool {
        self.links[idx].is_empty()
    }

    /// Indices of pages without outbound links.
    pub(crate) fn sinks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&i| self.is_sink(i))
    }

    /// Total number of links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }
}

fn resolve_targets(
    page: &str,
    targets: &BTreeSet<String>,
    index: &HashMap<String, usize>,
) -> Result<Vec<usize>> {
    let mut resolved = Vec::with_capacity(targets.len());
    for target in targets {
        if target == page {
            return Err(GraphError::SelfLink(page.to_string()).into());
        }
        let Some(&t) = index.get(target) else {
            return Err(GraphError::UnknownLink {
                page: page.to_string(),
                target: target.clone(),
            }
            .into());
        };
        resolved.push(t);
    }
    resolved.sort_unstable();
    Ok(resolved)
}
