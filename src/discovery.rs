// src/discovery.rs
use crate::error::{RankError, Result};
use crate::graph::rank::builder::build_graph;
use crate::graph::rank::LinkGraph;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DOCUMENT_EXT: &str = "html";

/// Crawls the `.html` documents directly inside `dir` into a link graph.
///
/// # Errors
/// Returns error if `dir` cannot be listed or a document cannot be read, or
/// `GraphError::Empty` if the directory holds no documents.
pub fn crawl(dir: &Path) -> Result<LinkGraph> {
    let paths = walk_corpus(dir)?;
    let documents = read_documents(&paths)?;
    tracing::info!(dir = %dir.display(), documents = documents.len(), "corpus loaded");
    build_graph(&documents)
}

fn walk_corpus(dir: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_document(entry.path()) {
            paths.push(entry.into_path());
        } else {
            tracing::debug!(path = %entry.path().display(), "skipping non-document");
        }
    }
    Ok(paths)
}

fn is_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == DOCUMENT_EXT)
}

fn read_documents(paths: &[PathBuf]) -> Result<Vec<(String, String)>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let content = fs::read_to_string(path).map_err(|source| RankError::Io {
            source,
            path: path.clone(),
        })?;
        documents.push((name, content));
    }
    Ok(documents)
}
