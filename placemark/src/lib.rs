//! Placemark - coordinates from saved map links
//!
//! This library backs a catalog of places a user has visited or wants to
//! visit. Each place may carry a link to a map service; the [`extract`]
//! module recovers the latitude and longitude encoded in that link so the
//! place can be pinned on a map.
//!
//! # Quick Start
//!
//! ```
//! use placemark::extract::{extract_coordinates, Dialect};
//!
//! let result = extract_coordinates("https://www.google.com/maps/@50.0875,14.4213,15z");
//! assert_eq!(result.dialect(), Some(Dialect::GoogleMaps));
//!
//! let coord = result.coordinate().unwrap();
//! assert_eq!((coord.lat(), coord.lng()), (50.0875, 14.4213));
//! ```
//!
//! Links without recognizable coordinates yield
//! [`Extraction::NoMatch`](extract::Extraction::NoMatch), never an error.

pub mod config;
pub mod coord;
pub mod extract;
pub mod location;
pub mod log;
pub mod logging;
pub mod removal;
pub mod resource;

/// Version of the placemark library and CLI.
///
/// Defined once in the workspace `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
