use anyhow::Result;
use clap::{CommandFactory, Parser};

use file_explorer::cli::{Cli, Command};
use file_explorer::commands;
use file_explorer::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::Show(args) => {
            tracing::info!(?args, "Showing rows");
            commands::show::run(args, &config)?;
        }
        Command::Tui(args) => {
            tracing::info!(?args, "Starting TUI");
            // Terminal rows are laid out in cells
            let mut config = config;
            config.indent = config.tui.indent;
            let explorer = commands::build_explorer(&args.explorer, &config)?;
            let colors = !args.no_color && config.tui.color_scheme != "none";
            let mouse = config.tui.mouse && !args.no_mouse;
            file_explorer::tui::run(explorer, colors, mouse)?;
        }
        Command::Completions(args) => {
            let mut stdout = std::io::stdout();
            clap_complete::generate(args.shell, &mut Cli::command(), "file-explorer", &mut stdout);
        }
        Command::Man => {
            let man = clap_mangen::Man::new(Cli::command());
            man.render(&mut std::io::stdout())?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("file_explorer={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
