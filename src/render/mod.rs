//! Row projection, windowing and text formatting.

mod rows;
pub mod text;
mod virtualizer;

pub use rows::{flatten, project, FlatRow, Focus, IndentMetrics, Row};
pub use virtualizer::{Viewport, Virtualizer};
