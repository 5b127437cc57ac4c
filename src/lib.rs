//! File Explorer - a virtualized, selectable tree view
//!
//! This crate provides functionality for:
//! - Holding a forest of titled nodes and loading it from JSON or TOML
//! - Tracking selection and expansion through a pure reducer
//! - Flattening the visible tree and virtualizing it to a viewport
//! - Printing the rows or exploring them in an interactive TUI

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod explorer;
pub mod model;
pub mod render;
pub mod state;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{ExplorerError, Result};
pub use explorer::{ExplorerOptions, Interaction, TreeExplorer};
pub use model::{Forest, Node, NodeId};
