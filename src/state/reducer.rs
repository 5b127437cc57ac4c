//! Pure state transitions driven by user interaction.

use super::expansion::ExpansionState;
use super::selection::{SelectionMode, SelectionState};
use crate::model::{Forest, NodeId};

/// A change request emitted by a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// The expand affordance of a node was activated.
    ToggleExpand(NodeId),
    /// A row or its checkbox was activated.
    Select(NodeId),
}

/// Selection and expansion, owned by the top-level explorer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeState {
    pub selection: SelectionState,
    pub expansion: ExpansionState,
}

impl TreeState {
    pub fn new(selection: SelectionState, expansion: ExpansionState) -> Self {
        Self {
            selection,
            expansion,
        }
    }
}

/// Compute the state that follows `event`.
///
/// Toggling a leaf or an unknown node, and selecting an unknown node, leave
/// the state unchanged.
pub fn reduce(forest: &Forest, mode: SelectionMode, state: &TreeState, event: TreeEvent) -> TreeState {
    let mut next = state.clone();

    match event {
        TreeEvent::ToggleExpand(id) => {
            if forest.has_children(id) {
                next.expansion.toggle(id);
            }
        }
        TreeEvent::Select(id) => {
            if mode == SelectionMode::Single && forest.contains(id) {
                next.selection = SelectionState::single(id);
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    fn forest() -> Forest {
        Forest::from_nodes(vec![Node::branch(
            1,
            "Root",
            vec![Node::branch(2, "Folder", vec![Node::leaf(3, "File")]), Node::leaf(4, "Other")],
        )])
        .unwrap()
    }

    fn state(selected: &[u64], expanded: &[u64]) -> TreeState {
        TreeState::new(
            selected.iter().copied().map(NodeId).collect(),
            expanded.iter().copied().map(NodeId).collect(),
        )
    }

    #[test]
    fn test_toggle_expands_and_collapses() {
        let forest = forest();
        let initial = state(&[], &[1]);

        let expanded = reduce(&forest, SelectionMode::Single, &initial, TreeEvent::ToggleExpand(NodeId(2)));
        assert!(expanded.expansion.contains(NodeId(2)));

        let collapsed = reduce(&forest, SelectionMode::Single, &expanded, TreeEvent::ToggleExpand(NodeId(2)));
        assert_eq!(collapsed, initial);
    }

    #[test]
    fn test_toggle_leaf_is_noop() {
        let forest = forest();
        let initial = state(&[], &[1]);
        let next = reduce(&forest, SelectionMode::Single, &initial, TreeEvent::ToggleExpand(NodeId(3)));
        assert_eq!(next, initial);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let forest = forest();
        let initial = state(&[4], &[1]);
        let next = reduce(&forest, SelectionMode::Single, &initial, TreeEvent::ToggleExpand(NodeId(77)));
        assert_eq!(next, initial);
    }

    #[test]
    fn test_select_replaces_selection() {
        let forest = forest();
        let initial = state(&[1, 4], &[]);
        let next = reduce(&forest, SelectionMode::Single, &initial, TreeEvent::Select(NodeId(3)));
        assert_eq!(next.selection, SelectionState::single(NodeId(3)));
        assert_eq!(next.expansion, initial.expansion);
    }

    #[test]
    fn test_reselect_keeps_single_selection() {
        let forest = forest();
        let initial = state(&[3], &[]);
        let next = reduce(&forest, SelectionMode::Single, &initial, TreeEvent::Select(NodeId(3)));
        assert_eq!(next, initial);
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let forest = forest();
        let initial = state(&[4], &[]);
        let next = reduce(&forest, SelectionMode::Single, &initial, TreeEvent::Select(NodeId(99)));
        assert_eq!(next, initial);
    }

    #[test]
    fn test_selection_mode_none_ignores_select() {
        let forest = forest();
        let initial = state(&[], &[]);
        let next = reduce(&forest, SelectionMode::None, &initial, TreeEvent::Select(NodeId(2)));
        assert!(next.selection.is_empty());
    }
}
