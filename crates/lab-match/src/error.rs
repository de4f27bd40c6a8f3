//! Unified error type for the lab-match public API.

use thiserror::Error;

use crate::convert::BufferError;
use crate::matching::MatchError;
use crate::palette::{ParseColorError, ParseError};

/// Unified error type for the lab-match public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use lab_match::{Error, Palette, Rgb};
///
/// fn darkest_match(text: &str) -> Result<Rgb, Error> {
///     let palette = Palette::parse(text)?;
///     Ok(lab_match::resolve(Rgb::BLACK, &palette)?)
/// }
///
/// assert_eq!(darkest_match("Ink 10 10 10\n").unwrap(), Rgb::new(10, 10, 10));
/// assert!(matches!(darkest_match(""), Err(Error::Match(_))));
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Palette text could not be parsed
    #[error("palette error: {0}")]
    Palette(#[from] ParseError),
    /// Hex color string could not be parsed
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
    /// Nearest-color resolution failed
    #[error("match error: {0}")]
    Match(#[from] MatchError),
    /// Pixel data did not fit the stated dimensions
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_from_conversions_and_source() {
        let err: Error = MatchError::EmptyPalette.into();
        assert!(matches!(err, Error::Match(MatchError::EmptyPalette)));
        assert!(err.source().is_some());

        let err: Error = "zz".parse::<crate::Rgb>().unwrap_err().into();
        assert!(err.to_string().starts_with("color parse error: "));
    }
}
