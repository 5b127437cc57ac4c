//! Subcommand implementations.

pub mod show;

use crate::cli::ExplorerArgs;
use crate::config::Config;
use crate::error::Result;
use crate::explorer::{ExplorerOptions, TreeExplorer};
use crate::model::sample::{sample_nodes, DEFAULT_EXPANDED, DEFAULT_SELECTED};
use crate::model::Forest;

/// Build the explorer described by the configuration and command-line overrides.
pub fn build_explorer(args: &ExplorerArgs, config: &Config) -> Result<TreeExplorer> {
    let mut options = config.explorer_options();
    let forest = match args.forest.as_deref().or(config.explorer.forest.as_deref()) {
        Some(path) => Forest::load(path)?,
        None => {
            // Sample ids only mean something in the sample forest
            if config.explorer.default_expanded.is_none() {
                options = options.with_expanded(DEFAULT_EXPANDED);
            }
            if config.explorer.default_selected.is_none() {
                options = options.with_selected(DEFAULT_SELECTED);
            }
            Forest::from_nodes(sample_nodes())?
        }
    };

    let options = apply_overrides(options, args, &forest);
    Ok(TreeExplorer::new(forest, options))
}

fn apply_overrides(mut options: ExplorerOptions, args: &ExplorerArgs, forest: &Forest) -> ExplorerOptions {
    if args.expand_all {
        options = options.with_expanded(forest.branch_ids());
    } else if let Some(ids) = args.expanded_ids() {
        options = options.with_expanded(ids);
    }
    if let Some(ids) = args.selected_ids() {
        options = options.with_selected(ids);
    }
    if let Some(row_height) = args.row_height {
        options = options.with_row_height(row_height);
    }
    if let Some(label) = &args.label {
        options = options.with_label(label.clone());
    }
    options
}
