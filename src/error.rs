use std::path::PathBuf;
use thiserror::Error;

use crate::model::NodeId;

/// Core library errors
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Forest error: {0}")]
    Forest(#[from] ForestError),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while building or loading a forest
#[derive(Error, Debug)]
pub enum ForestError {
    #[error("Duplicate node id {0}")]
    DuplicateId(NodeId),

    #[error("Node {id} refers to unknown parent {parent}")]
    UnknownParent { id: NodeId, parent: NodeId },

    #[error("Parent links form a cycle through node {0}")]
    Cycle(NodeId),

    #[error("Failed to read forest file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse forest file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported forest file format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ExplorerError>;
