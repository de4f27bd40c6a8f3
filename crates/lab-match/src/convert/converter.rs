//! The image conversion driver and its builder.

use crate::convert::PixelBuffer;
use crate::matching::{MatchError, NearestColor, NeighborhoodCache, DEFAULT_RADIUS};
use crate::palette::Palette;

/// Counters for one [`convert()`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Pixels rewritten
    pub pixels: usize,
    /// Pixels answered by the cache
    pub hits: u64,
    /// Pixels that needed a palette scan
    pub misses: u64,
}

/// Replace every pixel of `buffer` with its nearest reference color.
///
/// Pixels are visited in row-major order. Each one goes through
/// [`NeighborhoodCache::resolve()`], so `resolver` only runs on cache misses.
/// Pixels do not depend on each other except through the shared cache.
///
/// # Errors
///
/// Stops at the first resolver error. Pixels visited before the error have
/// already been overwritten.
pub fn convert<R>(
    buffer: &mut PixelBuffer,
    resolver: &R,
    cache: &mut NeighborhoodCache,
) -> Result<ConversionStats, MatchError>
where
    R: NearestColor + ?Sized,
{
    let before = cache.stats();

    for pixel in buffer.pixels_mut() {
        *pixel = cache.resolve(*pixel, resolver)?;
    }

    let after = cache.stats();
    let stats = ConversionStats {
        pixels: buffer.pixels().len(),
        hits: after.hits - before.hits,
        misses: after.misses - before.misses,
    };
    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        hits = stats.hits,
        misses = stats.misses,
        cached = cache.len(),
        "Converted pixel buffer"
    );

    Ok(stats)
}

/// Palette conversion builder -- the primary entry point for the crate.
///
/// Owns the [`Palette`] and the neighborhood radius for new caches.
/// [`convert()`](Self::convert) takes `&self`, so one converter serves every
/// image of a run.
///
/// # Example
///
/// ```
/// use lab_match::{Palette, PaletteConverter, PixelBuffer, Rgb};
///
/// let palette = Palette::new([("black", Rgb::BLACK), ("white", Rgb::WHITE)]).unwrap();
/// let converter = PaletteConverter::new(palette).radius(8);
///
/// let mut buffer = PixelBuffer::new(2, 1, vec![Rgb::new(20, 20, 20), Rgb::new(230, 230, 230)]).unwrap();
/// let mut cache = converter.new_cache();
/// converter.convert(&mut buffer, &mut cache).unwrap();
///
/// assert_eq!(buffer.pixels(), &[Rgb::BLACK, Rgb::WHITE]);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteConverter {
    palette: Palette,
    radius: u8,
}

impl PaletteConverter {
    /// Create a converter with the default neighborhood radius (35).
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Set the neighborhood radius used by [`new_cache()`](Self::new_cache).
    ///
    /// `0` disables neighborhood population, making every pixel exact.
    #[inline]
    pub fn radius(mut self, radius: u8) -> Self {
        self.radius = radius;
        self
    }

    /// The palette pixels are mapped onto.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// An empty cache with this converter's radius.
    pub fn new_cache(&self) -> NeighborhoodCache {
        NeighborhoodCache::new(self.radius)
    }

    /// Convert `buffer` in place, reusing `cache` across calls.
    ///
    /// The cache's own radius applies; pass one from
    /// [`new_cache()`](Self::new_cache) to use the configured radius.
    pub fn convert(
        &self,
        buffer: &mut PixelBuffer,
        cache: &mut NeighborhoodCache,
    ) -> Result<ConversionStats, MatchError> {
        convert(buffer, &self.palette, cache)
    }
}
