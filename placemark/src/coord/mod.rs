//! Geographic coordinate types.
//!
//! Provides the validated [`Coordinate`] value produced by the extractor and
//! consumed by anything that renders a map preview or link.

mod types;

#[cfg(test)]
mod tests;

pub use types::{Coordinate, CoordError, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};

/// Checks that a latitude lies within `MIN_LAT..=MAX_LAT`.
///
/// NaN is rejected.
#[inline]
pub fn validate_latitude(lat: f64) -> Result<f64, CoordError> {
    if (MIN_LAT..=MAX_LAT).contains(&lat) {
        Ok(lat)
    } else {
        Err(CoordError::InvalidLatitude(lat))
    }
}

/// Checks that a longitude lies within `MIN_LNG..=MAX_LNG`.
///
/// NaN is rejected.
#[inline]
pub fn validate_longitude(lng: f64) -> Result<f64, CoordError> {
    if (MIN_LNG..=MAX_LNG).contains(&lng) {
        Ok(lng)
    } else {
        Err(CoordError::InvalidLongitude(lng))
    }
}
