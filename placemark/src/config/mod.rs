//! User configuration.
//!
//! Settings are read from `~/.placemark/config.ini`; a missing file means
//! defaults. Two sections exist:
//!
//! ```ini
//! [extract]
//! policy = first-pattern
//!
//! [logging]
//! diagnostics = false
//! level = info
//! ```
//!
//! ```
//! use placemark::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! let key: ConfigKey = "logging.diagnostics".parse().unwrap();
//! key.set(&mut config, "true").unwrap();
//! assert!(config.logging.diagnostics);
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_DIAGNOSTICS, DEFAULT_LOG_LEVEL, DEFAULT_MATCH_POLICY};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{ConfigFile, ExtractSettings, LoggingSettings};
