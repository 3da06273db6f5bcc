//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list` and `config path` for
//! viewing and modifying settings from the command line. All of them act on
//! the file chosen with `--config`, defaulting to ~/.placemark/config.ini.

use clap::Subcommand;
use std::io::{self, Write};

use placemark::config::{ConfigFile, ConfigKey};

use super::common::Context;
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., extract.policy)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., extract.policy)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, ctx: &Context) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key, ctx),
        ConfigCommands::Set { key, value } => run_set(&key, &value, ctx),
        ConfigCommands::List => run_list(ctx),
        ConfigCommands::Path => run_path(ctx),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'placemark config list' to see available keys.",
            key
        ))
    })
}

/// Load for display; a broken file falls back to defaults with a warning.
fn load_or_default(ctx: &Context) -> ConfigFile {
    ConfigFile::load_from(ctx.config_path()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default configuration");
        ConfigFile::default()
    })
}

/// Get a configuration value.
fn run_get(key: &str, ctx: &Context) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = load_or_default(ctx);

    println!("{}", config_key.get(&config));
    Ok(())
}

/// Set a configuration value.
///
/// Only the named key is rewritten; other entries in the file are kept even
/// when one of them is invalid.
fn run_set(key: &str, value: &str, ctx: &Context) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    config_key
        .validate(value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    let stored = ConfigFile::update_key_at(ctx.config_path(), config_key, value)?;

    println!("Set {} = {}", config_key.name(), stored);
    Ok(())
}

/// List all configuration settings.
fn run_list(ctx: &Context) -> Result<(), CliError> {
    let config = load_or_default(ctx);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(&mut out, &config).map_err(CliError::Output)
}

fn write_list<W: Write>(out: &mut W, config: &ConfigFile) -> io::Result<()> {
    writeln!(out, "Configuration Settings")?;
    writeln!(out, "======================")?;

    let mut current_section = "";
    for key in ConfigKey::all() {
        let section = key.section();
        if section != current_section {
            writeln!(out)?;
            writeln!(out, "[{}]", section)?;
            current_section = section;
        }
        writeln!(out, "  {} = {}", key.key_name(), key.get(config))?;
    }
    Ok(())
}

/// Show the configuration file path.
fn run_path(ctx: &Context) -> Result<(), CliError> {
    println!("{}", ctx.config_path().display());
    Ok(())
}
