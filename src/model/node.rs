use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node. Unique across the whole forest, not just per parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// One entry of the displayed hierarchy in its nested input form.
///
/// This is the shape forests are authored in. It is converted into a
/// [`Forest`](super::Forest) arena before anything is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    /// Children in display order
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: NodeId(id),
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(id: u64, title: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: NodeId(id),
            title: title.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A flat node description: children are linked to parents by id.
///
/// Siblings keep the order in which their records appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub title: String,
    #[serde(default)]
    pub parent: Option<NodeId>,
}
