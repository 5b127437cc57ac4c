mod document;
mod forest;
mod node;
pub mod sample;

pub use document::ForestDocument;
pub use forest::{Forest, ForestNode};
pub use node::{Node, NodeId, NodeRecord};
