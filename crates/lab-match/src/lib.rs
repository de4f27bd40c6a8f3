#![allow(clippy::excessive_precision, clippy::module_inception)]

//! lab-match: Nearest palette color matching in CIE L*a*b*
//!
//! This library maps arbitrary 8-bit RGB colors onto the closest entry of a
//! small named palette, judging "closest" the way a viewer would rather
//! than by raw channel differences. Whole images are converted through a
//! neighborhood cache that skips most palette scans on photographic input.
//!
//! # Quick Start
//!
//! The [`PaletteConverter`] builder is the primary entry point:
//!
//! ```
//! use lab_match::{Palette, PaletteConverter, PixelBuffer, Rgb};
//!
//! let palette = Palette::parse("Black 0 0 0\nWhite 255 255 255\n").unwrap();
//! let converter = PaletteConverter::new(palette);
//!
//! let mut buffer = PixelBuffer::new(2, 2, vec![Rgb::new(128, 128, 128); 4]).unwrap();
//! let mut cache = converter.new_cache();
//! let stats = converter.convert(&mut buffer, &mut cache).unwrap();
//!
//! assert_eq!(stats.pixels, 4);
//! assert_eq!(buffer.get(0, 0), Some(Rgb::WHITE));
//! ```
//!
//! # Single Colors
//!
//! For one-off lookups, use [`resolve()`] or go through the
//! [`NearestColor`] trait:
//!
//! ```
//! use lab_match::{resolve, Palette, Rgb};
//!
//! let palette = Palette::parse("Black 0 0 0\nRed 136 0 0\n").unwrap();
//! assert_eq!(resolve(Rgb::new(120, 10, 10), &palette).unwrap(), Rgb::new(136, 0, 0));
//! ```
//!
//! # Color Science
//!
//! ## Two Color Spaces, Two Purposes
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | **sRGB** ([`Rgb`]) | Standard 8-bit encoding | Input/output: image files, palette files, cache keys |
//! | **CIE L\*a\*b\*** ([`Lab`]) | Approximately perceptually uniform | Palette matching via [`Palette::find_nearest()`] |
//!
//! Pixels are never modified in Lab. Lab values exist only to compare
//! colors; the output pixel is always the palette entry's original sRGB
//! value, copied byte for byte.
//!
//! ## Conversion
//!
//! ```text
//! sRGB u8
//!     |  gamma decode via 256-entry LUT (percent scale)
//!     v
//! linear RGB
//!     |  3x3 matrix, rounded to 4 decimals
//!     v
//! XYZ (D65, 2° observer)
//!     |  divide by reference white, cube root above 0.008865
//!     v
//! L*a*b*  (rounded to 4 decimals)
//! ```
//!
//! Both roundings are part of the definition. They make the result
//! reproducible bit-for-bit, and two palette entries that tie after
//! rounding are resolved by palette order.
//!
//! ## Distance Metric
//!
//! ```text
//! d = sqrt((a1 - a2)^2 + (b1 - b2)^2) + |L1 - L2|
//! ```
//!
//! Chrominance contributes Euclidean distance and lightness contributes
//! its absolute difference. Compared with plain Euclidean Lab distance this
//! keeps lightness from being drowned out by large chroma gaps, so a dark
//! grey stays with a dark palette entry instead of jumping to a saturated
//! color of similar hue angle. See [`Lab::distance()`].
//!
//! ## Neighborhood Cache
//!
//! After a palette scan, [`NeighborhoodCache`] stores the result for the
//! queried color and a band of nearby colors (see [`neighborhood()`]).
//! Those neighbors are assumed, not verified, to share the result. This is
//! an accuracy trade: radius 0 is exact, the default radius 35 is fast on
//! photographs and may miscolor pixels near a boundary between two palette
//! entries.

pub mod color;
pub mod convert;
pub mod error;
pub mod matching;
pub mod palette;


pub use color::{Lab, Rgb};
pub use convert::{convert, BufferError, ConversionStats, PaletteConverter, PixelBuffer};
pub use error::Error;
pub use matching::{
    neighborhood, resolve, CacheStats, MatchError, NearestColor, NeighborhoodCache,
    DEFAULT_RADIUS,
};
pub use palette::{Palette, PaletteEntry, ParseColorError, ParseError};
