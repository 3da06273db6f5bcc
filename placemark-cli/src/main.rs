//! Placemark CLI - Command-line interface
//!
//! Reads coordinates out of map service links and inspects exported
//! location catalogs.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use placemark::config::{ConfigFile, DEFAULT_LOG_LEVEL};
use placemark::log::LogLevel;
use placemark::logging::init_logging;

use commands::common::Context;
use commands::config::ConfigCommands;
use commands::extract::ExtractArgs;
use commands::locations::LocationsArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "placemark")]
#[command(version = placemark::VERSION)]
#[command(about = "Read coordinates from map service links", long_about = None)]
struct Cli {
    /// Log debug output and extraction diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (default: ~/.placemark/config.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract coordinates from map URLs
    Extract(ExtractArgs),

    /// List supported map link formats in priority order
    Dialects,

    /// Summarize a JSON file of location rows
    Locations(LocationsArgs),

    /// View or modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();
    let ctx = Context::new(cli.config, cli.verbose);

    if let Err(e) = init(&ctx) {
        e.exit();
    }

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(args, &ctx),
        Commands::Dialects => commands::dialects::run(),
        Commands::Locations(args) => commands::locations::run(args, &ctx),
        Commands::Config(command) => commands::config::run(command, &ctx),
    };

    if let Err(e) = result {
        e.exit();
    }
}

/// Install the stderr subscriber at the configured level.
///
/// A config file that fails to load only affects the level here; the
/// command itself reports the error.
fn init(ctx: &Context) -> Result<(), CliError> {
    let level = if ctx.verbose {
        LogLevel::Debug
    } else {
        ConfigFile::load_from(ctx.config_path())
            .map(|c| c.logging.level)
            .unwrap_or(DEFAULT_LOG_LEVEL)
    };

    init_logging(level).map_err(|e| CliError::LoggingInit(e.to_string()))
}
