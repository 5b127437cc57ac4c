//! Interactive terminal front end for the explorer.

pub mod app;
pub mod event;
pub mod ui;

pub use app::App;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::explorer::TreeExplorer;

const TICK: Duration = Duration::from_millis(250);

/// Run the TUI until the user quits.
pub fn run(mut explorer: TreeExplorer, colors: bool, mouse: bool) -> io::Result<()> {
    explorer.on_selection_change(|selection| {
        tracing::info!(?selection, "Selection changed");
    });
    explorer.on_expanded_change(|expansion| {
        tracing::debug!(expanded = expansion.len(), "Expansion changed");
    });
    let mut app = App::new(explorer).with_colors(colors);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| {
            app.set_tree_area(ui::tree_area(frame.area()));
            ui::render(app, frame);
        })?;

        event::handle_events(app, TICK)?;
    }
    Ok(())
}
