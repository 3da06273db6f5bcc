//! URL dialects that embed a coordinate pair, and their pattern table.

use regex::{Captures, Regex};
use std::fmt;
use std::sync::OnceLock;

use super::error::ExtractError;

/// Optionally signed decimal: `12`, `12.`, `12.5` or `.5`. ASCII digits only.
const NUMBER: &str = r"-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)";

/// Unsigned zoom level; matched to anchor the `@` form, never captured.
const ZOOM: &str = r"[0-9]+\.?[0-9]*";

/// Order of the two captured numbers in a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrder {
    /// First capture is latitude, second is longitude
    LatLng,
    /// First capture is longitude, second is latitude
    LngLat,
}

impl AxisOrder {
    /// Rearranges two captures into `(lat, lng)`.
    #[inline]
    pub fn arrange(self, first: f64, second: f64) -> (f64, f64) {
        match self {
            AxisOrder::LatLng => (first, second),
            AxisOrder::LngLat => (second, first),
        }
    }
}

/// A recognized URL encoding of a coordinate pair.
///
/// Variants are listed in priority order: specific forms come before
/// generic ones that could match a substring of another dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// mapy.cz style `?x=<lng>&y=<lat>` query parameters
    MapyCz,
    /// Google Maps style `@<lat>,<lng>,<zoom>z` path segment
    GoogleMaps,
    /// Generic `q=<lat>,<lng>` query parameter
    Query,
    /// Generic `ll=<lat>,<lng>` query parameter
    LatLngParam,
}

impl Dialect {
    /// All dialects, highest priority first.
    pub const ALL: [Dialect; 4] = [
        Dialect::MapyCz,
        Dialect::GoogleMaps,
        Dialect::Query,
        Dialect::LatLngParam,
    ];

    /// Short machine-friendly identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MapyCz => "mapy-cz",
            Dialect::GoogleMaps => "google-maps",
            Dialect::Query => "q",
            Dialect::LatLngParam => "ll",
        }
    }

    /// Map service the dialect is usually seen on.
    pub fn service(&self) -> &'static str {
        match self {
            Dialect::MapyCz => "mapy.cz",
            Dialect::GoogleMaps => "Google Maps",
            Dialect::Query | Dialect::LatLngParam => "Generic",
        }
    }

    /// Human readable shape of the encoded values.
    pub fn format(&self) -> &'static str {
        match self {
            Dialect::MapyCz => "x=lng, y=lat",
            Dialect::GoogleMaps => "@lat,lng,zoom",
            Dialect::Query => "q=lat,lng",
            Dialect::LatLngParam => "ll=lat,lng",
        }
    }

    /// Order in which the two captured numbers appear in the URL.
    pub fn axis_order(&self) -> AxisOrder {
        match self {
            Dialect::MapyCz => AxisOrder::LngLat,
            _ => AxisOrder::LatLng,
        }
    }

    fn pattern_source(&self) -> String {
        match self {
            Dialect::MapyCz => format!(r"[?&]x=({NUMBER})&y=({NUMBER})"),
            Dialect::GoogleMaps => format!(r"@({NUMBER}),({NUMBER}),{ZOOM}z"),
            Dialect::Query => format!(r"q=({NUMBER}),({NUMBER})"),
            Dialect::LatLngParam => format!(r"ll=({NUMBER}),({NUMBER})"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.service(), self.format())
    }
}

/// One entry of the pattern table: a compiled matcher for a dialect.
#[derive(Debug)]
pub(crate) struct PatternRule {
    pub dialect: Dialect,
    regex: Regex,
}

impl PatternRule {
    fn new(dialect: Dialect) -> Self {
        // Sources are built from the constants above.
        let regex = Regex::new(&dialect.pattern_source()).expect("Valid dialect regex");
        Self { dialect, regex }
    }

    /// Returns the two raw numbers in capture order, or `None` when the
    /// pattern does not occur in `url`.
    pub fn capture(&self, url: &str) -> Result<Option<(f64, f64)>, ExtractError> {
        let Some(captures) = self.regex.captures(url) else {
            return Ok(None);
        };

        let first = self.number(&captures, 1)?;
        let second = self.number(&captures, 2)?;
        Ok(Some((first, second)))
    }

    fn number(&self, captures: &Captures<'_>, group: usize) -> Result<f64, ExtractError> {
        let text = captures
            .get(group)
            .map(|m| m.as_str())
            .ok_or(ExtractError::MissingCapture {
                dialect: self.dialect,
                group,
            })?;

        text.parse::<f64>()
            .map_err(|source| ExtractError::InvalidNumber {
                dialect: self.dialect,
                text: text.to_string(),
                source,
            })
    }
}

/// The ordered pattern table, compiled once per process.
pub(crate) fn rules() -> &'static [PatternRule] {
    static RULES: OnceLock<Vec<PatternRule>> = OnceLock::new();
    RULES.get_or_init(|| Dialect::ALL.iter().copied().map(PatternRule::new).collect())
}
