//! Nearest-color resolution against a palette.

use thiserror::Error;

use crate::color::Rgb;
use crate::palette::Palette;

/// Error type for color resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The palette has no entries, so there is nothing to match against.
    #[error("palette is empty, no color can be resolved")]
    EmptyPalette,
}

/// Something that maps a query color to its nearest reference color.
///
/// [`Palette`] is the production implementation. The
/// [`NeighborhoodCache`](super::NeighborhoodCache) and the conversion driver
/// only depend on this trait, so callers can wrap a palette (for instance to
/// count how often full scans happen).
pub trait NearestColor {
    /// Return the reference color nearest to `query`.
    fn nearest(&self, query: Rgb) -> Result<Rgb, MatchError>;
}

impl NearestColor for Palette {
    #[inline]
    fn nearest(&self, query: Rgb) -> Result<Rgb, MatchError> {
        self.find_nearest(query)
            .map(|(idx, _)| self.entries()[idx].color())
            .ok_or(MatchError::EmptyPalette)
    }
}

impl<T: NearestColor + ?Sized> NearestColor for &T {
    #[inline]
    fn nearest(&self, query: Rgb) -> Result<Rgb, MatchError> {
        (**self).nearest(query)
    }
}

/// Resolve `query` to the nearest color of `palette`.
///
/// Always returns an exact member of the palette. Ties go to the entry that
/// comes first in the palette.
///
/// # Errors
///
/// [`MatchError::EmptyPalette`] if the palette has no entries.
///
/// # Example
///
/// ```
/// use lab_match::{resolve, Palette, Rgb};
///
/// let palette = Palette::new([("black", Rgb::BLACK), ("white", Rgb::WHITE)]).unwrap();
/// assert_eq!(resolve(Rgb::new(250, 250, 250), &palette).unwrap(), Rgb::WHITE);
/// ```
pub fn resolve(query: Rgb, palette: &Palette) -> Result<Rgb, MatchError> {
    palette.nearest(query)
}
