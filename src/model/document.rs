//! Forest documents on disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::forest::Forest;
use super::node::{Node, NodeRecord};
use crate::error::ForestError;

/// Accepted document shapes.
///
/// ```toml
/// [[roots]]
/// id = 1
/// title = "Work"
/// [[roots.children]]
/// id = 2
/// title = "Reports"
/// ```
///
/// or flat records linked by `parent`:
///
/// ```toml
/// [[nodes]]
/// id = 2
/// title = "Reports"
/// parent = 1
/// ```
///
/// JSON additionally accepts a bare array of nested nodes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ForestDocument {
    Nested { roots: Vec<Node> },
    Flat { nodes: Vec<NodeRecord> },
    Bare(Vec<Node>),
}

impl ForestDocument {
    pub fn into_forest(self) -> Result<Forest, ForestError> {
        match self {
            ForestDocument::Nested { roots } | ForestDocument::Bare(roots) => {
                Forest::from_nodes(roots)
            }
            ForestDocument::Flat { nodes } => Forest::from_records(nodes),
        }
    }
}

impl Forest {
    /// Load a forest from a `.json` or `.toml` document.
    pub fn load(path: &Path) -> Result<Forest, ForestError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse_error = |message: String| ForestError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let document: ForestDocument = match extension.as_deref() {
            Some("json") => {
                let content = read(path)?;
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            Some("toml") => {
                let content = read(path)?;
                toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            _ => return Err(ForestError::UnsupportedFormat(path.to_path_buf())),
        };

        let forest = document.into_forest()?;
        tracing::info!(path = %path.display(), nodes = forest.len(), "Loaded forest");
        Ok(forest)
    }
}

fn read(path: &Path) -> Result<String, ForestError> {
    fs::read_to_string(path).map_err(|source| ForestError::Read {
        path: path.to_path_buf(),
        source,
    })
}
