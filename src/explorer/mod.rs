//! The explorer controller.
//!
//! [`TreeExplorer`] is the single owner of selection and expansion. Hosts
//! forward interaction as [`TreeEvent`]s, read back [`Row`]s for the
//! materialized window, and report scroll and resize so the window can be
//! recomputed. Windowing and focus never touch selection or expansion.

mod options;

pub use options::{
    ExplorerOptions, DEFAULT_LABEL, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_EXTENT,
};

use std::ops::Range;

use crate::error::ForestError;
use crate::model::sample::sample_nodes;
use crate::model::{Forest, NodeId};
use crate::render::{flatten, project, FlatRow, Focus, IndentMetrics, Row, Viewport, Virtualizer};
use crate::state::{reduce, ExpansionState, SelectionMode, SelectionState, TreeEvent, TreeState};

/// How focus reached a row. Keyboard focus draws a focus ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Pointer,
    Keyboard,
}

type Listener<T> = Box<dyn FnMut(&T)>;

pub struct TreeExplorer {
    forest: Forest,
    state: TreeState,
    mode: SelectionMode,
    label: String,
    indent: IndentMetrics,
    virtualizer: Virtualizer,
    viewport: Viewport,

    /// Expansion-filtered rows in display order
    rows: Vec<FlatRow>,

    /// Indices of `rows` currently materialized
    window: Range<usize>,

    focus: Option<Focus>,
    on_selection_change: Option<Listener<SelectionState>>,
    on_expanded_change: Option<Listener<ExpansionState>>,
}

impl TreeExplorer {
    pub fn new(forest: Forest, options: ExplorerOptions) -> Self {
        let state = TreeState::new(options.selected, options.expanded);
        let rows = flatten(&forest, &state.expansion);
        let virtualizer = Virtualizer::new(options.row_height, options.overscan);
        let viewport = Viewport::new(0, options.viewport_extent);
        let window = virtualizer.visible_range(rows.len(), viewport);

        tracing::debug!(
            nodes = forest.len(),
            rows = rows.len(),
            window = ?window,
            "Created explorer"
        );

        Self {
            forest,
            state,
            mode: options.selection_mode,
            label: options.label,
            indent: options.indent,
            virtualizer,
            viewport,
            rows,
            window,
            focus: None,
            on_selection_change: None,
            on_expanded_change: None,
        }
    }

    /// Explorer over the built-in sample forest with its default state.
    pub fn sample() -> Result<Self, ForestError> {
        let forest = Forest::from_nodes(sample_nodes())?;
        Ok(Self::new(forest, ExplorerOptions::sample()))
    }

    /// Called with the new selection after every change.
    pub fn on_selection_change(&mut self, listener: impl FnMut(&SelectionState) + 'static) {
        self.on_selection_change = Some(Box::new(listener));
    }

    /// Called with the new expansion after every change.
    pub fn on_expanded_change(&mut self, listener: impl FnMut(&ExpansionState) + 'static) {
        self.on_expanded_change = Some(Box::new(listener));
    }

    /// Apply a change request from a row.
    pub fn dispatch(&mut self, event: TreeEvent) {
        let target = match event {
            TreeEvent::ToggleExpand(id) | TreeEvent::Select(id) => id,
        };
        if !self.forest.contains(target) {
            tracing::warn!(id = %target, ?event, "Ignoring event for unknown node");
            return;
        }

        let next = reduce(&self.forest, self.mode, &self.state, event);
        if next == self.state {
            tracing::debug!(?event, "Event left state unchanged");
            return;
        }

        let previous = std::mem::replace(&mut self.state, next);
        tracing::debug!(?event, "Applied event");

        if previous.expansion != self.state.expansion {
            self.rows = flatten(&self.forest, &self.state.expansion);
            self.reveal_focus();
            self.set_offset(self.viewport.offset);
            if let Some(listener) = self.on_expanded_change.as_mut() {
                listener(&self.state.expansion);
            }
        }

        if previous.selection != self.state.selection {
            if let Some(listener) = self.on_selection_change.as_mut() {
                listener(&self.state.selection);
            }
        }
    }

    /// Activate the expand affordance of `id`.
    pub fn toggle_expand(&mut self, id: NodeId) {
        self.dispatch(TreeEvent::ToggleExpand(id));
    }

    /// Expand `id` if it is a collapsed branch.
    pub fn expand(&mut self, id: NodeId) {
        if self.forest.has_children(id) && !self.state.expansion.contains(id) {
            self.toggle_expand(id);
        }
    }

    /// Collapse `id` if it is expanded.
    pub fn collapse(&mut self, id: NodeId) {
        if self.forest.has_children(id) && self.state.expansion.contains(id) {
            self.toggle_expand(id);
        }
    }

    /// Activate the row (or checkbox) of `id`.
    pub fn select(&mut self, id: NodeId) {
        self.dispatch(TreeEvent::Select(id));
    }

    /// Scroll to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: u64) {
        self.set_offset(offset);
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let offset = if delta < 0 {
            self.viewport.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.viewport.offset.saturating_add(delta.unsigned_abs())
        };
        self.set_offset(offset);
    }

    /// The host's viewport changed height.
    pub fn resize(&mut self, extent: u64) {
        self.viewport.extent = extent;
        self.set_offset(self.viewport.offset);
    }

    fn set_offset(&mut self, offset: u64) {
        self.viewport.offset = self
            .virtualizer
            .clamp_offset(self.rows.len(), Viewport::new(offset, self.viewport.extent));

        let window = self.virtualizer.visible_range(self.rows.len(), self.viewport);
        if window != self.window {
            tracing::trace!(from = ?self.window, to = ?window, "Window changed");
            self.window = window;
        }
    }

    /// The materialized rows.
    pub fn rows(&self) -> Vec<Row<'_>> {
        self.project(self.window.clone())
    }

    /// Every visible row, ignoring the window.
    pub fn all_rows(&self) -> Vec<Row<'_>> {
        self.project(0..self.rows.len())
    }

    fn project(&self, range: Range<usize>) -> Vec<Row<'_>> {
        project(
            &self.forest,
            &self.state,
            &self.rows,
            range,
            self.focus,
            &self.indent,
        )
    }

    /// Number of rows in the flattened list.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Indices of the materialized rows.
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn row_height(&self) -> u64 {
        self.virtualizer.row_height()
    }

    /// Height of the full list, used to size the scroll area.
    pub fn total_extent(&self) -> u64 {
        self.virtualizer.total_extent(self.rows.len())
    }

    /// Rows that fit in the viewport; at least one.
    pub fn page_size(&self) -> usize {
        usize::try_from(self.viewport.extent / self.virtualizer.row_height())
            .unwrap_or(usize::MAX)
            .max(1)
    }

    pub fn row_id(&self, index: usize) -> Option<NodeId> {
        self.rows.get(index).map(|row| row.id)
    }

    /// Position of `id` in the flattened list, if visible.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Node under a point `y` units below the top of the viewport.
    pub fn row_at(&self, y: u64) -> Option<NodeId> {
        if y >= self.viewport.extent {
            return None;
        }
        let index = (self.viewport.offset + y) / self.virtualizer.row_height();
        self.row_id(usize::try_from(index).ok()?)
    }

    /// Move focus to `id`. Returns false when the node is not visible.
    pub fn focus(&mut self, id: NodeId, interaction: Interaction) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.focus_index(index, interaction);
        true
    }

    fn focus_index(&mut self, index: usize, interaction: Interaction) {
        let Some(id) = self.row_id(index) else {
            return;
        };
        self.focus = Some(Focus {
            id,
            visible: interaction == Interaction::Keyboard,
        });
        if interaction == Interaction::Keyboard {
            let offset = self
                .virtualizer
                .scroll_into_view(index, self.rows.len(), self.viewport);
            self.set_offset(offset);
        }
    }

    /// Move keyboard focus by `delta` rows, clamped to the list.
    pub fn move_focus(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let index = match self.focused().and_then(|id| self.index_of(id)) {
            Some(current) => current
                .saturating_add_signed(delta)
                .min(self.rows.len() - 1),
            None => 0,
        };
        self.focus_index(index, Interaction::Keyboard);
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    pub fn focus_first(&mut self) {
        self.focus_index(0, Interaction::Keyboard);
    }

    pub fn focus_last(&mut self) {
        if let Some(last) = self.rows.len().checked_sub(1) {
            self.focus_index(last, Interaction::Keyboard);
        }
    }

    /// Move focus by whole pages; negative pages move up.
    pub fn focus_page(&mut self, pages: isize) {
        let rows = isize::try_from(self.page_size()).unwrap_or(isize::MAX);
        self.move_focus(pages.saturating_mul(rows));
    }

    /// Move keyboard focus to the parent of the focused row.
    pub fn focus_parent(&mut self) -> bool {
        match self.focused().and_then(|id| self.forest.parent(id)) {
            Some(parent) => self.focus(parent, Interaction::Keyboard),
            None => false,
        }
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focus.map(|focus| focus.id)
    }

    pub fn focus_visible(&self) -> bool {
        self.focus.is_some_and(|focus| focus.visible)
    }

    /// After a collapse hides the focused row, move focus to its nearest
    /// visible ancestor.
    fn reveal_focus(&mut self) {
        let Some(focus) = self.focus else {
            return;
        };
        if self.index_of(focus.id).is_some() {
            return;
        }
        let ancestor = self
            .forest
            .ancestors(focus.id)
            .find(|&ancestor| self.index_of(ancestor).is_some());
        self.focus = ancestor.map(|id| Focus { id, ..focus });
    }

    pub fn state(&self) -> &TreeState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.state.expansion
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn indent(&self) -> IndentMetrics {
        self.indent
    }
}
