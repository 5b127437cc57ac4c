//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, Mode};
use crate::render::text::{checkbox, chevron};
use crate::render::Row;

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Tree view
            Constraint::Length(2), // Footer
        ])
        .split(area)
}

fn tree_block(app: &App) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.style(Style::default().fg(Color::Gray)))
}

/// Where rows are drawn for a frame of size `area`.
pub fn tree_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(layout(area)[1])
}

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout(frame.area());

    render_header(app, frame, chunks[0]);
    render_tree_area(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    if app.mode == Mode::Help {
        render_help_overlay(app, frame);
    }
}

impl App {
    /// `style` when colors are on, plain otherwise.
    fn style(&self, style: Style) -> Style {
        if self.colors {
            style
        } else {
            Style::default()
        }
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let explorer = &app.explorer;
    let selected: Vec<&str> = explorer
        .selection()
        .iter()
        .filter_map(|id| explorer.forest().title(id))
        .collect();
    let selected = if selected.is_empty() {
        "none".to_string()
    } else {
        selected.join(", ")
    };

    let window = explorer.window();
    let header_text = format!(
        " Selected: {}  │  {} rows  │  showing {}-{}",
        selected,
        explorer.row_count(),
        window.start,
        window.end
    );

    let block = Block::default()
        .title(format!(" {} ", explorer.label()))
        .borders(Borders::ALL)
        .border_style(app.style(Style::default().fg(Color::Cyan)));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(app.style(Style::default().fg(Color::White)));

    frame.render_widget(paragraph, area);
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = tree_block(app);

    if app.explorer.row_count() == 0 {
        let paragraph = Paragraph::new("No data")
            .block(block)
            .alignment(Alignment::Center)
            .style(app.style(Style::default().fg(Color::DarkGray)));

        frame.render_widget(paragraph, area);
        return;
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let viewport = app.explorer.viewport();
    let row_height = app.explorer.row_height();

    // Overscan rows are materialized but fall outside the viewport
    for row in app.explorer.rows() {
        let top = row.index as u64 * row_height;
        if top < viewport.offset {
            continue;
        }
        let line = (top - viewport.offset) / row_height;
        if line >= u64::from(inner_area.height) {
            continue;
        }

        let y = inner_area.y + line as u16;
        render_row(app, frame, &row, Rect::new(inner_area.x, y, inner_area.width, 1));
    }
}

fn render_row(app: &App, frame: &mut Frame, row: &Row<'_>, area: Rect) {
    let indent = " ".repeat(row.indent as usize);

    let title_style = if row.is_selected {
        app.style(Style::default().fg(Color::Yellow)).bold()
    } else if row.has_children {
        app.style(Style::default().fg(Color::Blue))
    } else {
        app.style(Style::default().fg(Color::White))
    };

    let checkbox_style = if row.is_selected {
        app.style(Style::default().fg(Color::Green))
    } else {
        app.style(Style::default().fg(Color::DarkGray))
    };

    let mut spans = vec![Span::raw(indent)];
    if let Some(chevron) = chevron(row) {
        let chevron_style = if row.is_expanded {
            app.style(Style::default().fg(Color::White))
        } else {
            app.style(Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(chevron, chevron_style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(checkbox(row), checkbox_style));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(row.title.to_string(), title_style));

    let mut line = Line::from(spans);

    // Focus ring only for keyboard focus
    if row.focus_visible {
        line = line.style(if app.colors {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        });
    }

    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => "[↑↓] Navigate  [←→] Collapse/Expand  [Space] Select  [?] Help  [q] Quit",
        Mode::Help => "[Esc] Close",
    };

    // Show status message if present, otherwise hints
    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(app.style(Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let help_width = 50u16.min(area.width.saturating_sub(8));
    let help_height = 20u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 NAVIGATION
 ─────────────────────────────────
 ↑/k        Move up
 ↓/j        Move down
 →/l        Expand / Go to first child
 ←/h        Collapse / Go to parent
 PgUp/PgDn  Move one page
 g/G        Go to top / bottom

 SELECTION
 ─────────────────────────────────
 Space      Select focused row
 Enter      Select focused row
 Click      Select row / toggle on ▶

 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.style(Style::default().fg(Color::Cyan)));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(app.style(Style::default().fg(Color::White)));

    frame.render_widget(paragraph, help_area);
}
