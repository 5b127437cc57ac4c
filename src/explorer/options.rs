use crate::model::sample::{DEFAULT_EXPANDED, DEFAULT_SELECTED};
use crate::model::NodeId;
use crate::render::IndentMetrics;
use crate::state::{ExpansionState, SelectionMode, SelectionState};

/// Height of one row, in the same unit as the viewport.
pub const DEFAULT_ROW_HEIGHT: u32 = 35;

/// Rows materialized beyond each edge of the viewport.
pub const DEFAULT_OVERSCAN: usize = 2;

/// Viewport height used until the host reports its real size.
pub const DEFAULT_VIEWPORT_EXTENT: u64 = 384;

/// Name announced to accessibility tooling and shown as the title.
pub const DEFAULT_LABEL: &str = "File Explorer";

/// Construction properties for a [`TreeExplorer`](super::TreeExplorer).
#[derive(Debug, Clone)]
pub struct ExplorerOptions {
    /// Initially selected ids
    pub selected: SelectionState,

    /// Initially expanded ids
    pub expanded: ExpansionState,

    /// Fixed row height used for virtualization
    pub row_height: u32,

    /// Extra rows materialized above and below the viewport
    pub overscan: usize,

    /// Initial viewport height
    pub viewport_extent: u64,

    /// Accessibility label
    pub label: String,

    pub selection_mode: SelectionMode,

    pub indent: IndentMetrics,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            selected: SelectionState::new(),
            expanded: ExpansionState::new(),
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            viewport_extent: DEFAULT_VIEWPORT_EXTENT,
            label: DEFAULT_LABEL.to_string(),
            selection_mode: SelectionMode::Single,
            indent: IndentMetrics::PIXELS,
        }
    }
}

impl ExplorerOptions {
    /// Create options with default values and nothing selected or expanded
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching the built-in sample forest
    pub fn sample() -> Self {
        Self::new()
            .with_selected(DEFAULT_SELECTED)
            .with_expanded(DEFAULT_EXPANDED)
    }

    pub fn with_selected(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.selected = ids.into_iter().collect();
        self
    }

    pub fn with_expanded(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.expanded = ids.into_iter().collect();
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_overscan(mut self, rows: usize) -> Self {
        self.overscan = rows;
        self
    }

    pub fn with_viewport_extent(mut self, extent: u64) -> Self {
        self.viewport_extent = extent;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    pub fn with_indent(mut self, indent: IndentMetrics) -> Self {
        self.indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExplorerOptions::default();
        assert_eq!(options.row_height, 35);
        assert_eq!(options.label, "File Explorer");
        assert_eq!(options.selection_mode, SelectionMode::Single);
        assert!(options.selected.is_empty());
        assert!(options.expanded.is_empty());
    }

    #[test]
    fn test_sample_options() {
        let options = ExplorerOptions::sample();
        assert_eq!(options.selected, SelectionState::single(NodeId(23)));
        assert_eq!(options.expanded.len(), 7);
        assert!(options.expanded.contains(NodeId(21)));
    }

    #[test]
    fn test_builder_chain() {
        let options = ExplorerOptions::new()
            .with_row_height(1)
            .with_overscan(0)
            .with_label("Files")
            .with_indent(IndentMetrics::CELLS)
            .with_expanded([NodeId(7)]);
        assert_eq!(options.row_height, 1);
        assert_eq!(options.overscan, 0);
        assert_eq!(options.label, "Files");
        assert_eq!(options.indent, IndentMetrics::CELLS);
        assert!(options.expanded.contains(NodeId(7)));
    }
}
