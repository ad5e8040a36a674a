//! tapstats - TAP test reporting with per-category timing statistics

use clap::{Parser, Subcommand};
use std::io::Write;
use tapstats::commands::*;
use tapstats::style::ColorMode;
use tapstats::ui::CliUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tapstats")]
#[command(about = "TAP test reporter with timing statistics", long_about = None)]
struct Cli {
    /// Directory holding .tapstats.conf (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    directory: Option<String>,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report a subunit stream as TAP, followed by timing statistics
    Report {
        /// Subunit v2 file to read (defaults to stdin)
        input: Option<String>,

        /// Label printed in front of every result
        #[arg(long)]
        launcher: Option<String>,

        /// When to colour output: auto, always or never
        #[arg(long, env = "TAPSTATS_COLOR")]
        color: Option<ColorMode>,

        /// Do not print failed tests again after the statistics table
        #[arg(long)]
        no_reprint: bool,
    },

    /// Show only the per-category statistics table
    Stats {
        /// Subunit v2 file to read (defaults to stdin)
        input: Option<String>,

        /// When to colour output: auto, always or never
        #[arg(long, env = "TAPSTATS_COLOR")]
        color: Option<ColorMode>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ui = CliUI::new();

    let result = match cli.command {
        Commands::Report {
            input,
            launcher,
            color,
            no_reprint,
        } => {
            let cmd = ReportCommand::new(cli.directory, input)
                .launcher(launcher)
                .color(color)
                .no_reprint(no_reprint);
            cmd.execute(&mut ui)
        }
        Commands::Stats { input, color } => {
            let cmd = StatsCommand::new(cli.directory, input).color(color);
            cmd.execute(&mut ui)
        }
    };

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            let _ = writeln!(std::io::stderr(), "Error: {}", e);
            std::process::exit(1);
        }
    }
}
