use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// How user activation affects the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Activating a row never changes the selection.
    None,
    /// Activating a row replaces the selection with that row.
    #[default]
    Single,
}

/// The set of currently selected node ids.
///
/// The initial value is taken as given; only user-driven changes are
/// constrained by the [`SelectionMode`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState(BTreeSet<NodeId>);

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding exactly `id`.
    pub fn single(id: NodeId) -> Self {
        Self(BTreeSet::from([id]))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<NodeId> for SelectionState {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
