//! Coordinate extraction from map service URLs.
//!
//! Map links saved with a location come from several services that each
//! encode the point differently. This module recognizes those encodings
//! ([`Dialect`]) and normalizes them to a validated [`Coordinate`].
//!
//! Supported forms, highest priority first:
//!
//! | Dialect | Example | Capture order |
//! |---|---|---|
//! | mapy.cz | `?x=14.4378&y=50.0755` | lng, lat |
//! | Google Maps | `@50.0755,14.4378,15z` | lat, lng (zoom ignored) |
//! | Generic | `q=48.8566,2.3522` | lat, lng |
//! | Generic | `ll=40.7128,-74.0060` | lat, lng |
//!
//! [`Coordinate`]: crate::coord::Coordinate

mod dialect;
mod error;
mod extractor;


pub use dialect::{AxisOrder, Dialect};
pub use error::ExtractError;
pub use extractor::{extract_coordinates, CoordinateExtractor, Extraction, MatchPolicy};
