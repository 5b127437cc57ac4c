//! Integration tests for the TUI module.
//!
//! These tests exercise the TUI with simulated input, verifying correct
//! behavior without requiring an actual terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use file_explorer::explorer::{ExplorerOptions, TreeExplorer};
use file_explorer::model::{sample::sample_nodes, Forest, NodeId};
use file_explorer::render::IndentMetrics;
use file_explorer::state::SelectionState;
use file_explorer::tui::app::Mode;
use file_explorer::tui::event::{handle_key_event, handle_mouse_event};
use file_explorer::tui::App;
use ratatui::layout::Rect;

/// Rows area of an 80x24 terminal.
const TREE_AREA: Rect = Rect {
    x: 1,
    y: 4,
    width: 78,
    height: 17,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn app() -> App {
    let forest = Forest::from_nodes(sample_nodes()).unwrap();
    let explorer = TreeExplorer::new(
        forest,
        ExplorerOptions::sample().with_indent(IndentMetrics::CELLS),
    );
    let mut app = App::new(explorer);
    app.set_tree_area(TREE_AREA);
    app
}

#[test]
fn test_tui_initial_state() {
    let app = app();

    assert_eq!(app.mode, Mode::Normal);
    assert!(app.explorer.focused().is_none());
    assert_eq!(app.explorer.selection(), &SelectionState::single(NodeId(23)));
    assert_eq!(app.explorer.viewport().extent, 17 * 35);
}

#[test]
fn test_tui_navigation_down_and_up() {
    let mut app = app();

    handle_key_event(&mut app, key(KeyCode::Down));
    assert_eq!(app.explorer.focused(), Some(NodeId(1)));

    handle_key_event(&mut app, key(KeyCode::Down));
    assert_eq!(app.explorer.focused(), Some(NodeId(2)));

    handle_key_event(&mut app, key(KeyCode::Up));
    assert_eq!(app.explorer.focused(), Some(NodeId(1)));
    assert!(app.explorer.focus_visible());
}

#[test]
fn test_tui_end_scrolls_to_last_row() {
    let mut app = app();

    handle_key_event(&mut app, key_char('G'));
    assert_eq!(app.explorer.focused(), Some(NodeId(34)));
    assert_eq!(app.explorer.window().end, app.explorer.row_count());

    handle_key_event(&mut app, key_char('g'));
    assert_eq!(app.explorer.focused(), Some(NodeId(1)));
    assert_eq!(app.explorer.viewport().offset, 0);
}

#[test]
fn test_tui_page_down_moves_a_page() {
    let mut app = app();

    handle_key_event(&mut app, key_char('g'));
    handle_key_event(&mut app, key(KeyCode::PageDown));

    assert_eq!(app.explorer.index_of(app.explorer.focused().unwrap()), Some(17));
}

#[test]
fn test_tui_collapse_and_expand_with_arrows() {
    let mut app = app();
    let rows = app.explorer.row_count();

    // Focus "Q1 Report" and collapse it
    for _ in 0..4 {
        handle_key_event(&mut app, key(KeyCode::Down));
    }
    assert_eq!(app.explorer.focused(), Some(NodeId(4)));

    handle_key_event(&mut app, key(KeyCode::Left));
    assert!(!app.explorer.expansion().contains(NodeId(4)));
    assert_eq!(app.explorer.row_count(), rows - 100);

    // Left again steps out to the parent
    handle_key_event(&mut app, key(KeyCode::Left));
    assert_eq!(app.explorer.focused(), Some(NodeId(3)));

    handle_key_event(&mut app, key(KeyCode::Down));
    handle_key_event(&mut app, key(KeyCode::Right));
    assert!(app.explorer.expansion().contains(NodeId(4)));
    assert_eq!(app.explorer.row_count(), rows);

    // Right on an expanded branch steps into it
    handle_key_event(&mut app, key(KeyCode::Right));
    assert_eq!(app.explorer.focused(), Some(NodeId(1000)));
}

#[test]
fn test_tui_select_with_space() {
    let mut app = app();

    handle_key_event(&mut app, key(KeyCode::Down));
    handle_key_event(&mut app, key(KeyCode::Down));
    handle_key_event(&mut app, key_char(' '));

    assert_eq!(app.explorer.selection(), &SelectionState::single(NodeId(2)));
    assert_eq!(app.status_message.as_deref(), Some("Selected: Reports"));
}

#[test]
fn test_tui_click_chevron_collapses_work() {
    let mut app = app();

    // "Work" is the first row, its chevron at the left edge
    handle_mouse_event(&mut app, click(1, 4));

    assert!(!app.explorer.expansion().contains(NodeId(1)));
    assert_eq!(app.explorer.selection(), &SelectionState::single(NodeId(23)));
    assert_eq!(app.explorer.focused(), Some(NodeId(1)));
    assert!(!app.explorer.focus_visible());
}

#[test]
fn test_tui_click_row_selects() {
    let mut app = app();
    handle_mouse_event(&mut app, click(1, 4));

    // Work, Personal, Projects, Web Development, Portfolio, Images, CSS, Landing Page
    handle_mouse_event(&mut app, click(20, 4 + 7));

    assert_eq!(app.explorer.selection(), &SelectionState::single(NodeId(26)));
    assert_eq!(app.status_message.as_deref(), Some("Selected: Landing Page"));
}

#[test]
fn test_tui_wheel_then_click() {
    let mut app = app();

    handle_mouse_event(
        &mut app,
        MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        },
    );
    assert_eq!(app.explorer.viewport().offset, 3 * 35);

    // The first line now shows "Q1 Report"
    handle_mouse_event(&mut app, click(30, 4));
    assert_eq!(app.explorer.selection(), &SelectionState::single(NodeId(4)));
    assert!(app.explorer.expansion().contains(NodeId(4)));
}

#[test]
fn test_tui_help_toggle() {
    let mut app = app();

    handle_key_event(&mut app, key_char('?'));
    assert_eq!(app.mode, Mode::Help);

    handle_key_event(&mut app, key_char('?'));
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn test_tui_quit() {
    let mut app = app();
    handle_key_event(&mut app, key_char('q'));
    assert!(app.should_quit);
}
