//! Internal failures while evaluating a dialect.
//!
//! These never leave the extractor: they are logged and turned into
//! [`Extraction::NoMatch`](super::Extraction::NoMatch).

use std::num::ParseFloatError;
use thiserror::Error;

use super::Dialect;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    /// The pattern matched but a capture group was not populated.
    #[error("{dialect} pattern matched without capture group {group}")]
    MissingCapture { dialect: Dialect, group: usize },

    /// A captured value could not be read as a decimal number.
    #[error("{dialect} value '{text}' is not a number: {source}")]
    InvalidNumber {
        dialect: Dialect,
        text: String,
        #[source]
        source: ParseFloatError,
    },
}
