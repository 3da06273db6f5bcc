//! The coordinate extractor.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use super::dialect::{rules, Dialect};
use crate::config::ConfigFile;
use crate::coord::Coordinate;
use crate::log::{Logger, NoOpLogger};
use crate::{log_debug, log_trace, log_warn};

/// What to do when a dialect's pattern matches but its values are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The first dialect whose pattern matches decides the result.
    /// Out-of-range values end the scan with [`Extraction::NoMatch`].
    #[default]
    FirstPattern,
    /// Out-of-range values are skipped and lower-priority dialects are tried.
    FirstValid,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::FirstPattern => "first-pattern",
            MatchPolicy::FirstValid => "first-valid",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "first-pattern" => Ok(MatchPolicy::FirstPattern),
            "first-valid" => Ok(MatchPolicy::FirstValid),
            other => Err(format!(
                "unknown match policy '{}' (expected first-pattern or first-valid)",
                other
            )),
        }
    }
}

/// Outcome of an extraction.
///
/// `NoMatch` is an ordinary result, not an error: callers should simply skip
/// whatever they would have rendered for a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extraction {
    /// A validated coordinate and the dialect it was read from.
    Match {
        coordinate: Coordinate,
        dialect: Dialect,
    },
    /// No recognized, in-range coordinate encoding was found.
    NoMatch,
}

impl Extraction {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Extraction::Match { coordinate, .. } => Some(*coordinate),
            Extraction::NoMatch => None,
        }
    }

    pub fn dialect(&self) -> Option<Dialect> {
        match self {
            Extraction::Match { dialect, .. } => Some(*dialect),
            Extraction::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Extraction::Match { .. })
    }
}

impl From<Extraction> for Option<Coordinate> {
    fn from(extraction: Extraction) -> Self {
        extraction.coordinate()
    }
}

/// Reads a coordinate pair out of a map service URL.
///
/// The extractor walks [`Dialect::ALL`] in priority order and stops at the
/// first dialect whose pattern occurs in the input. It never fails: empty
/// input, unknown formats, out-of-range values and internal parse failures
/// all come back as [`Extraction::NoMatch`].
///
/// Diagnostics go to the injected [`Logger`], which defaults to
/// [`NoOpLogger`].
///
/// # Example
///
/// ```
/// use placemark::extract::{CoordinateExtractor, Dialect};
///
/// let extractor = CoordinateExtractor::new();
/// let result = extractor.extract("https://mapy.cz/zakladni?x=14.4378&y=50.0755");
///
/// let coord = result.coordinate().unwrap();
/// assert_eq!((coord.lat(), coord.lng()), (50.0755, 14.4378));
/// assert_eq!(result.dialect(), Some(Dialect::MapyCz));
/// ```
#[derive(Clone)]
pub struct CoordinateExtractor {
    logger: Arc<dyn Logger>,
    policy: MatchPolicy,
}

impl CoordinateExtractor {
    /// Creates an extractor with the default policy and no diagnostics.
    pub fn new() -> Self {
        Self {
            logger: Arc::new(NoOpLogger),
            policy: MatchPolicy::default(),
        }
    }

    /// Builds an extractor from the user configuration.
    ///
    /// `logger` is only used when `logging.diagnostics` is enabled.
    pub fn from_config(config: &ConfigFile, logger: Arc<dyn Logger>) -> Self {
        let extractor = Self::new().with_policy(config.extract.policy);
        if config.logging.diagnostics {
            extractor.with_logger(logger)
        } else {
            extractor
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Extracts a coordinate from an optional URL, as stored on a location.
    ///
    /// `None` yields `NoMatch`.
    pub fn extract_optional(&self, url: Option<&str>) -> Extraction {
        match url {
            Some(url) => self.extract(url),
            None => Extraction::NoMatch,
        }
    }

    /// Extracts a coordinate from `url`. An empty string yields `NoMatch`.
    pub fn extract(&self, url: &str) -> Extraction {
        if url.is_empty() {
            return Extraction::NoMatch;
        }

        for rule in rules() {
            let (first, second) = match rule.capture(url) {
                Ok(Some(values)) => values,
                Ok(None) => continue,
                Err(e) => {
                    log_warn!(self.logger, "Error extracting coordinates from URL: {}", e);
                    return Extraction::NoMatch;
                }
            };

            let (lat, lng) = rule.dialect.axis_order().arrange(first, second);
            match Coordinate::new(lat, lng) {
                Ok(coordinate) => {
                    log_debug!(
                        self.logger,
                        "{} matched {}: lat={}, lng={}",
                        rule.dialect,
                        url,
                        lat,
                        lng
                    );
                    return Extraction::Match {
                        coordinate,
                        dialect: rule.dialect,
                    };
                }
                Err(e) => {
                    log_debug!(self.logger, "{} matched {} but {}", rule.dialect, url, e);
                    if self.policy == MatchPolicy::FirstPattern {
                        return Extraction::NoMatch;
                    }
                }
            }
        }

        log_trace!(self.logger, "no dialect matched {}", url);
        Extraction::NoMatch
    }
}

impl Default for CoordinateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CoordinateExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinateExtractor")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Extracts a coordinate with a shared default extractor.
///
/// Same as `CoordinateExtractor::new().extract(url)` without rebuilding
/// anything per call.
///
/// ```
/// use placemark::extract::extract_coordinates;
///
/// let coord = extract_coordinates("https://maps.google.com/@50.0755,14.4378,15z")
///     .coordinate()
///     .unwrap();
/// assert_eq!((coord.lat(), coord.lng()), (50.0755, 14.4378));
/// assert!(!extract_coordinates("").is_match());
/// ```
pub fn extract_coordinates(url: &str) -> Extraction {
    static DEFAULT: OnceLock<CoordinateExtractor> = OnceLock::new();
    DEFAULT.get_or_init(CoordinateExtractor::new).extract(url)
}
