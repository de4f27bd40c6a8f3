//! Conversion of whole pixel buffers.
//!
//! [`PixelBuffer`] holds the decoded image; [`convert()`] and
//! [`PaletteConverter`] rewrite it in place through a
//! [`NeighborhoodCache`](crate::NeighborhoodCache).

mod converter;
mod pixel_buffer;

pub use converter::{convert, ConversionStats, PaletteConverter};
pub use pixel_buffer::{BufferError, PixelBuffer};
