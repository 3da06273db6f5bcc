//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`dialects`] - Supported map link formats
//! - [`extract`] - Coordinates from map URLs
//! - [`locations`] - Summary of an exported locations file

pub mod common;
pub mod config;
pub mod dialects;
pub mod extract;
pub mod locations;
