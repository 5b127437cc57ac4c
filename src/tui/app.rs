//! Application state for the TUI.

use ratatui::layout::Rect;

use crate::explorer::{Interaction, TreeExplorer};
use crate::model::NodeId;
use crate::render::text::CHEVRON_EXPANDED;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Help overlay mode.
    Help,
}

/// Main application state for the TUI.
pub struct App {
    /// The tree being explored. Owns selection and expansion.
    pub explorer: TreeExplorer,

    /// Current UI mode.
    pub mode: Mode,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,

    /// Draw with colors.
    pub colors: bool,

    /// Rows area from the last draw, used for mouse hit-testing.
    pub tree_area: Rect,
}

impl App {
    /// Create a new App instance.
    pub fn new(explorer: TreeExplorer) -> Self {
        Self {
            explorer,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            colors: true,
            tree_area: Rect::default(),
        }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Record where rows are drawn and size the viewport to match.
    ///
    /// One terminal line holds one row.
    pub fn set_tree_area(&mut self, area: Rect) {
        self.tree_area = area;
        let extent = u64::from(area.height) * self.explorer.row_height();
        self.explorer.resize(extent);
    }

    /// Focused node, focusing the first row if nothing has focus yet.
    fn focused_or_first(&mut self) -> Option<NodeId> {
        if self.explorer.focused().is_none() {
            self.explorer.focus_first();
        }
        self.explorer.focused()
    }

    /// Expand the focused branch, or step into its first child if already expanded.
    pub fn expand_focused(&mut self) {
        let Some(id) = self.focused_or_first() else {
            return;
        };
        if !self.explorer.forest().has_children(id) {
            return;
        }
        if self.explorer.expansion().contains(id) {
            self.explorer.focus_next();
        } else {
            self.explorer.expand(id);
        }
    }

    /// Collapse the focused branch, or step out to its parent.
    pub fn collapse_focused(&mut self) {
        let Some(id) = self.focused_or_first() else {
            return;
        };
        if self.explorer.forest().has_children(id) && self.explorer.expansion().contains(id) {
            self.explorer.collapse(id);
        } else {
            self.explorer.focus_parent();
        }
    }

    /// Select the focused row.
    pub fn select_focused(&mut self) {
        if let Some(id) = self.focused_or_first() {
            self.select(id);
        }
    }

    fn select(&mut self, id: NodeId) {
        self.explorer.select(id);
        if self.explorer.selection().contains(id) {
            let title = self.explorer.forest().title(id).unwrap_or_default();
            self.status_message = Some(format!("Selected: {}", title));
        }
    }

    /// Scroll by whole lines without moving focus.
    pub fn scroll_lines(&mut self, lines: i64) {
        let row_height = i64::try_from(self.explorer.row_height()).unwrap_or(i64::MAX);
        self.explorer.scroll_by(lines.saturating_mul(row_height));
    }

    /// Pointer press at a terminal cell.
    ///
    /// Pressing the chevron toggles expansion; pressing anywhere else on a
    /// row selects it.
    pub fn click(&mut self, column: u16, line: u16) {
        let area = self.tree_area;
        if column < area.x || column >= area.x + area.width || line < area.y || line >= area.y + area.height {
            return;
        }

        let y = u64::from(line - area.y) * self.explorer.row_height();
        let Some(id) = self.explorer.row_at(y) else {
            return;
        };

        let chevron_hit = self
            .explorer
            .rows()
            .iter()
            .find(|row| row.id == id)
            .filter(|row| row.has_children)
            .map(|row| {
                let start = u32::from(column - area.x);
                let chevron_width = CHEVRON_EXPANDED.chars().count() as u32 + 1;
                start >= row.indent && start < row.indent + chevron_width
            })
            .unwrap_or(false);

        self.explorer.focus(id, Interaction::Pointer);
        if chevron_hit {
            self.explorer.toggle_expand(id);
        } else {
            self.select(id);
        }
    }
}
