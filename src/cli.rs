use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::model::NodeId;

/// File Explorer - a virtualized, selectable tree view for the terminal
#[derive(Parser, Debug)]
#[command(name = "file-explorer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the rows of the tree for a viewport
    Show(ShowArgs),

    /// Launch the interactive tree explorer
    Tui(TuiArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Generate a man page
    Man,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Options shared by every command that builds an explorer
#[derive(Args, Debug, Default)]
pub struct ExplorerArgs {
    /// Forest document (.json or .toml) instead of the sample data
    #[arg(short, long, value_name = "PATH")]
    pub forest: Option<PathBuf>,

    /// Ids to expand initially (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "IDS")]
    pub expand: Option<Vec<u64>>,

    /// Expand every node that has children
    #[arg(long, conflicts_with = "expand")]
    pub expand_all: bool,

    /// Ids to select initially (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "IDS")]
    pub select: Option<Vec<u64>>,

    /// Fixed row height used for virtualization
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub row_height: Option<u32>,

    /// Accessibility label shown as the tree title
    #[arg(long, value_name = "TEXT")]
    pub label: Option<String>,
}

impl ExplorerArgs {
    pub fn expanded_ids(&self) -> Option<Vec<NodeId>> {
        self.expand
            .as_ref()
            .map(|ids| ids.iter().copied().map(NodeId).collect())
    }

    pub fn selected_ids(&self) -> Option<Vec<NodeId>> {
        self.select
            .as_ref()
            .map(|ids| ids.iter().copied().map(NodeId).collect())
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub explorer: ExplorerArgs,

    /// Scroll offset, in row-height units
    #[arg(long, default_value = "0", value_name = "N")]
    pub offset: u64,

    /// Viewport height, in row-height units (default: all rows)
    #[arg(long, value_name = "N")]
    pub height: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    #[command(flatten)]
    pub explorer: ExplorerArgs,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Don't capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_show_command() {
        let cli = Cli::parse_from(["file-explorer", "show", "--expand", "1,7", "--select", "26"]);
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.explorer.expanded_ids(), Some(vec![NodeId(1), NodeId(7)]));
                assert_eq!(args.explorer.selected_ids(), Some(vec![NodeId(26)]));
                assert_eq!(args.offset, 0);
                assert!(args.height.is_none());
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn parse_tui_with_forest() {
        let cli = Cli::parse_from(["file-explorer", "tui", "--forest", "tree.json", "--no-mouse"]);
        match cli.command {
            Command::Tui(args) => {
                assert_eq!(args.explorer.forest, Some(PathBuf::from("tree.json")));
                assert!(args.no_mouse);
                assert!(args.explorer.expanded_ids().is_none());
            }
            _ => panic!("Expected Tui command"),
        }
    }

    #[test]
    fn expand_and_expand_all_conflict() {
        let result = Cli::try_parse_from(["file-explorer", "show", "--expand", "1", "--expand-all"]);
        assert!(result.is_err());
    }

    #[test]
    fn row_height_must_be_positive() {
        let result = Cli::try_parse_from(["file-explorer", "show", "--row-height", "0"]);
        assert!(result.is_err());

        let cli = Cli::parse_from(["file-explorer", "show", "--row-height", "1"]);
        match cli.command {
            Command::Show(args) => assert_eq!(args.explorer.row_height, Some(1)),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn global_verbose_flag() {
        let cli = Cli::parse_from(["file-explorer", "-vvv", "show"]);
        assert_eq!(cli.verbose, 3);
    }
}
