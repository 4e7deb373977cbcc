// src/graph/rank/builder.rs
//! Graph construction from HTML documents: link extraction and corpus filtering.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use super::graph::LinkGraph;
use crate::error::Result;

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Every `href` target of an `<a>` tag in `content`.
#[must_use]
pub fn extract_links(content: &str) -> BTreeSet<String> {
    HREF_RE
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Builds a graph from `(name, html)` documents.
///
/// Self-links and links to names outside the corpus are dropped.
///
/// # Errors
/// Returns `GraphError::Empty` if `documents` is empty.
pub fn build_graph(documents: &[(String, String)]) -> Result<LinkGraph> {
    let mut raw: BTreeMap<&str, BTreeSet<String>> = documents
        .iter()
        .map(|(name, content)| {
            let mut links = extract_links(content);
            links.remove(name);
            (name.as_str(), links)
        })
        .collect();

    let known: BTreeSet<&str> = raw.keys().copied().collect();
    for links in raw.values_mut() {
        links.retain(|l| known.contains(l.as_str()));
    }

    LinkGraph::from_links(raw)
}
