//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use placemark::config::{config_file_path, ConfigFile};
use placemark::extract::{CoordinateExtractor, MatchPolicy};
use placemark::log::TracingLogger;

use crate::error::CliError;

/// Output format for command results.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `lat,lng` per line, or `no match`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Match policy selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PolicyArg {
    /// Out-of-range values in the first matching dialect mean no match
    FirstPattern,
    /// Out-of-range values fall through to lower-priority dialects
    FirstValid,
}

impl From<PolicyArg> for MatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FirstPattern => MatchPolicy::FirstPattern,
            PolicyArg::FirstValid => MatchPolicy::FirstValid,
        }
    }
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Config file in use (`--config`, else ~/.placemark/config.ini)
    pub config_path: PathBuf,
    pub verbose: bool,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config_path: config_path.unwrap_or_else(config_file_path),
            verbose,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config file; a missing file yields defaults.
    pub fn load_config(&self) -> Result<ConfigFile, CliError> {
        Ok(ConfigFile::load_from(&self.config_path)?)
    }

    /// Build an extractor from config, CLI policy and `--verbose`.
    ///
    /// `--verbose` turns on diagnostics even when the config leaves them off.
    pub fn extractor(
        &self,
        config: &ConfigFile,
        policy: Option<PolicyArg>,
    ) -> CoordinateExtractor {
        let mut config = config.clone();
        if self.verbose {
            config.logging.diagnostics = true;
        }

        let extractor = CoordinateExtractor::from_config(&config, Arc::new(TracingLogger::new()));
        match policy {
            Some(policy) => extractor.with_policy(policy.into()),
            None => extractor,
        }
    }
}
