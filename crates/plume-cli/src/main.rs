//! Plume CLI
//!
//! Command-line interface for the plume import formatter

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::FormatArgs;
use plume_core::{PlumeError, init_tracing};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "plume")]
#[command(about = "Plume: import declaration formatter for ESTree syntax trees")]
#[command(version = plume_core::VERSION)]
#[command(
    long_about = "Plume formats JavaScript/TypeScript syntax trees (ESTree JSON) with\n\
pluggable per-node rendering rules. Import declarations can be sorted and\n\
broken one specifier per line.\n\
\n\
Examples:\n  \
plume fmt tree.json                           # Print formatted output\n  \
plume fmt --multiline-imports tree.json       # One named import per line\n  \
plume fmt --sort-imports --write out.js tree.json\n  \
plume rules                                   # List registered rules\n  \
plume config schema                           # Print the config JSON schema"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.plumerc.json/.plumerc.toml)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a syntax tree and print the result
    Fmt {
        /// ESTree JSON file produced by a parser
        #[arg(help = "Syntax tree to format (ESTree JSON)")]
        file: PathBuf,

        #[command(flatten)]
        options: FormatArgs,

        /// Treat configuration warnings as errors
        #[arg(long, help = "Fail when the options do not validate")]
        strict: bool,

        /// Write output to a file instead of stdout
        #[arg(short, long, value_name = "OUT", help = "Write formatted output to this file")]
        write: Option<PathBuf>,
    },

    /// List registered rendering rules
    Rules,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the JSON schema for configuration files
    Schema,

    /// Show the configuration resolved for a directory
    Show {
        /// Directory to start config discovery from
        #[arg(help = "Directory to resolve configuration for (default: current directory)")]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    let debug_requested = matches!(&cli.command, Commands::Fmt { options, .. } if options.debug);
    let log_level = match cli.verbose {
        0 if debug_requested => "plume=debug",
        0 => "plume=error", // Only errors by default
        1 => "plume=warn",
        2 => "plume=info",
        3 => "plume=debug",
        _ => "plume=trace",
    };
    init_tracing(log_level);

    if let Err(e) = run_command(cli) {
        let kind = e.downcast_ref::<PlumeError>().map(PlumeError::kind);
        error!(?kind, "plume failed: {:#}", e);
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}

/// Exit status for a failed run: 2 when the rule table itself is broken,
/// 1 for errors scoped to the input
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<PlumeError>() {
        Some(err) if err.is_fatal() => 2,
        _ => 1,
    }
}

fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Fmt {
            file,
            options,
            strict,
            write,
        } => commands::format_command(file, options, cli.config, strict, write),

        Commands::Rules => commands::rules_command(),

        Commands::Config { action } => match action {
            ConfigAction::Schema => commands::config_schema_command(),
            ConfigAction::Show { path } => commands::config_show_command(path, cli.config),
        },
    }
}
