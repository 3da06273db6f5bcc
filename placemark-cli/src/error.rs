//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process;

use placemark::config::ConfigFileError;
use placemark::location::LocationError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to load or save the configuration file
    ConfigFile(ConfigFileError),
    /// Failed to read URLs from standard input
    Input(io::Error),
    /// Failed to write results
    Output(io::Error),
    /// Failed to load a locations file
    Locations { path: PathBuf, error: LocationError },
    /// `--strict` was given and some URLs had no coordinates
    Unmatched { unmatched: usize, total: usize },
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Unmatched { .. } => 2,
            _ => 1,
        }
    }

    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Locations {
                error: LocationError::Parse(_),
                ..
            } => {
                eprintln!();
                eprintln!("Expected a JSON array of location rows, for example:");
                eprintln!(
                    r#"  [{{"id": "1", "name": "Karlštejn", "location": "Czechia", "category_id": "castles", "map_url": "https://mapy.cz/?x=14.18&y=49.93"}}]"#
                );
            }
            CliError::ConfigFile(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Fix the value with 'placemark config set <key> <value>'.");
                eprintln!("Use 'placemark config list' to see available keys.");
            }
            _ => {}
        }

        process::exit(self.exit_code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Input(e) => write!(f, "Failed to read input: {}", e),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
            CliError::Locations { path, error } => {
                write!(f, "Failed to load '{}': {}", path.display(), error)
            }
            CliError::Unmatched { unmatched, total } => {
                write!(f, "{} of {} URLs had no coordinates", unmatched, total)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Input(e) => Some(e),
            CliError::Output(e) => Some(e),
            CliError::Locations { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}
