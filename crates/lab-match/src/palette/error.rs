//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette loading.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette definitions.
///
/// Line numbers are 1-based. Any error aborts loading; no partial palette
/// is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A record has fewer than the four fields `name r g b`
    #[error("line {line}: expected a name and three channel values, found {found} field(s)")]
    TooFewFields {
        /// Line of the offending record
        line: usize,
        /// Number of whitespace-separated fields on that line
        found: usize,
    },
    /// A channel field is not an integer in 0..=255
    #[error("line {line}: invalid channel value {value:?}: {source}")]
    InvalidChannel {
        /// Line of the offending record
        line: usize,
        /// The field after comma stripping
        value: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },
    /// The same entry name appears twice
    #[error("line {line}: duplicate palette entry {name:?}")]
    DuplicateName {
        /// Line of the second occurrence (entry position when built in memory)
        line: usize,
        /// The repeated name
        name: String,
    },
}
