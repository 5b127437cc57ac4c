//! Projection of the forest and the current state into display rows.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::model::{Forest, NodeId};
use crate::state::{ExpansionState, TreeState};

/// Horizontal layout of a row, in whatever unit the host draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentMetrics {
    /// Indent added per level below the roots
    pub unit: u32,
    /// Padding applied to every row
    pub base: u32,
    /// Extra padding on rows without an expand affordance, so their label
    /// lines up with the labels of sibling branches
    pub leaf_offset: u32,
}

impl IndentMetrics {
    /// Pixel metrics: 20px per level, 8px base padding, 20px chevron slot.
    pub const PIXELS: Self = Self {
        unit: 20,
        base: 8,
        leaf_offset: 20,
    };

    /// Terminal metrics: two cells per level, two-cell chevron slot.
    pub const CELLS: Self = Self {
        unit: 2,
        base: 0,
        leaf_offset: 2,
    };

    /// Indent for a row at `depth` (1 at the roots).
    pub fn indent(&self, depth: usize, has_children: bool) -> u32 {
        let level = u32::try_from(depth.saturating_sub(1)).unwrap_or(u32::MAX);
        let slot = if has_children { 0 } else { self.leaf_offset };
        level
            .saturating_mul(self.unit)
            .saturating_add(self.base)
            .saturating_add(slot)
    }
}

impl Default for IndentMetrics {
    fn default() -> Self {
        Self::PIXELS
    }
}

/// A visible node in depth-first display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatRow {
    pub id: NodeId,
    /// Depth in the tree (1 = root).
    pub depth: usize,
}

/// Focus ring position. Carries no data-model meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub id: NodeId,
    /// Whether focus arrived by keyboard (draw a ring) or pointer (don't).
    pub visible: bool,
}

/// Everything a host needs to draw one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<'a> {
    /// Position in the full flattened list
    pub index: usize,
    pub id: NodeId,
    pub title: &'a str,
    pub depth: usize,
    /// Draw an expand affordance
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_selected: bool,
    pub is_focused: bool,
    pub focus_visible: bool,
    pub indent: u32,
}

/// Flatten the expansion-filtered forest into display order.
///
/// Children of a node appear only when the node is expanded; the walk uses
/// an explicit stack.
pub fn flatten(forest: &Forest, expansion: &ExpansionState) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    let mut stack: Vec<FlatRow> = forest
        .roots()
        .iter()
        .rev()
        .map(|&id| FlatRow { id, depth: 1 })
        .collect();

    while let Some(row) = stack.pop() {
        rows.push(row);
        if expansion.contains(row.id) {
            stack.extend(forest.children(row.id).iter().rev().map(|&child| FlatRow {
                id: child,
                depth: row.depth + 1,
            }));
        }
    }

    rows
}

/// Materialize `range` of the flattened rows.
pub fn project<'a>(
    forest: &'a Forest,
    state: &TreeState,
    rows: &[FlatRow],
    range: Range<usize>,
    focus: Option<Focus>,
    metrics: &IndentMetrics,
) -> Vec<Row<'a>> {
    let start = range.start.min(rows.len());
    let end = range.end.min(rows.len()).max(start);

    rows[start..end]
        .iter()
        .enumerate()
        .filter_map(|(offset, flat)| {
            let node = forest.get(flat.id)?;
            let has_children = node.has_children();
            let is_focused = focus.is_some_and(|focus| focus.id == flat.id);
            Some(Row {
                index: start + offset,
                id: flat.id,
                title: node.title(),
                depth: flat.depth,
                has_children,
                is_expanded: has_children && state.expansion.contains(flat.id),
                is_selected: state.selection.contains(flat.id),
                is_focused,
                focus_visible: is_focused && focus.is_some_and(|focus| focus.visible),
                indent: metrics.indent(flat.depth, has_children),
            })
        })
        .collect()
}
