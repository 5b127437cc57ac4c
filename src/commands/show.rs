//! Show command implementation.

use anyhow::Result;
use serde::Serialize;

use crate::cli::ShowArgs;
use crate::commands::build_explorer;
use crate::config::Config;
use crate::explorer::TreeExplorer;
use crate::render::text::format_rows;
use crate::render::Row;
use crate::state::{ExpansionState, SelectionState};

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    label: &'a str,
    total_rows: usize,
    window: [usize; 2],
    selected: &'a SelectionState,
    expanded: &'a ExpansionState,
    rows: Vec<Row<'a>>,
}

/// Run the show command
pub fn run(args: ShowArgs, config: &Config) -> Result<()> {
    let mut config = config.clone();
    if !args.json {
        // Text output lays rows out in cells
        config.indent = config.tui.indent;
    }

    let mut explorer = build_explorer(&args.explorer, &config)?;
    apply_viewport(&mut explorer, args.offset, args.height);

    tracing::info!(
        rows = explorer.row_count(),
        window = ?explorer.window(),
        "Rendering rows"
    );

    let output = if args.json {
        format_json(&explorer)?
    } else {
        format_rows(&explorer.rows())
    };
    print!("{}", output);

    Ok(())
}

/// Size the viewport in row units; no height means every row.
pub fn apply_viewport(explorer: &mut TreeExplorer, offset: u64, height: Option<u64>) {
    let row_height = explorer.row_height();
    let extent = match height {
        Some(rows) => rows.saturating_mul(row_height),
        None => explorer.total_extent(),
    };
    explorer.resize(extent);
    explorer.scroll_to(offset.saturating_mul(row_height));
}

pub fn format_json(explorer: &TreeExplorer) -> Result<String> {
    let window = explorer.window();
    let output = ShowOutput {
        label: explorer.label(),
        total_rows: explorer.row_count(),
        window: [window.start, window.end],
        selected: explorer.selection(),
        expanded: explorer.expansion(),
        rows: explorer.rows(),
    };
    Ok(serde_json::to_string_pretty(&output)? + "\n")
}
