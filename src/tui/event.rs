//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app::{App, Mode};

/// Lines scrolled per mouse wheel notch.
const WHEEL_LINES: i64 = 3;

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) => {
                handle_key_event(app, key);
                return Ok(true);
            }
            Event::Mouse(mouse) => {
                handle_mouse_event(app, mouse);
                return Ok(true);
            }
            // Layout is re-synced on every draw
            _ => {}
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.explorer.focus_prev();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.explorer.focus_next();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.explorer.focus_first();
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.explorer.focus_last();
        }
        KeyCode::PageUp => {
            app.explorer.focus_page(-1);
        }
        KeyCode::PageDown => {
            app.explorer.focus_page(1);
        }

        // Expand/Collapse
        KeyCode::Right | KeyCode::Char('l') => {
            app.expand_focused();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.collapse_focused();
        }

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.select_focused();
        }

        // Help
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }

        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

/// Handle a single mouse event.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.mode != Mode::Normal {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.scroll_lines(WHEEL_LINES),
        MouseEventKind::ScrollUp => app.scroll_lines(-WHEEL_LINES),
        _ => {}
    }
}
