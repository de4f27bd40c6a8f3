//! Neighborhood memoization of resolved colors.
//!
//! Resolving a color scans the whole palette. Photographs contain large
//! regions of nearly identical colors, so after a miss the cache stores the
//! result not only for the queried color but for a band of colors around it.
//! Those neighbors are *assumed* to resolve to the same palette entry; they
//! are never checked. A wider radius means fewer palette scans and more
//! potential miscoloring near palette boundaries. Radius 0 stores only the
//! queried color, which makes every result exact.

use std::collections::HashMap;

use super::resolver::{MatchError, NearestColor};
use crate::color::Rgb;

/// Neighborhood radius used by [`NeighborhoodCache::default()`].
pub const DEFAULT_RADIUS: u8 = 35;

/// Hit and miss counters of a [`NeighborhoodCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that required a palette scan
    pub misses: u64,
}

/// Memoizes resolved colors together with their neighborhoods.
///
/// Has no eviction and no capacity bound; drop it or call
/// [`clear()`](Self::clear) between unrelated runs if memory matters. Sharing
/// one cache across images is fine as long as they use the same palette.
///
/// # Example
///
/// ```
/// use lab_match::{NeighborhoodCache, Palette, Rgb};
///
/// let palette = Palette::new([("black", Rgb::BLACK), ("white", Rgb::WHITE)]).unwrap();
/// let mut cache = NeighborhoodCache::new(4);
///
/// assert_eq!(cache.resolve(Rgb::new(20, 20, 20), &palette).unwrap(), Rgb::BLACK);
/// // Populated by the neighborhood of the first miss
/// assert_eq!(cache.get(Rgb::new(22, 20, 20)), Some(Rgb::BLACK));
/// ```
#[derive(Debug, Clone)]
pub struct NeighborhoodCache {
    entries: HashMap<Rgb, Rgb>,
    radius: u8,
    stats: CacheStats,
}

impl NeighborhoodCache {
    /// Create an empty cache with the given neighborhood radius.
    pub fn new(radius: u8) -> Self {
        Self {
            entries: HashMap::new(),
            radius,
            stats: CacheStats::default(),
        }
    }

    /// The neighborhood radius applied on every miss.
    #[inline]
    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Number of memoized colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been memoized yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a memoized color without resolving or counting.
    #[inline]
    pub fn get(&self, color: Rgb) -> Option<Rgb> {
        self.entries.get(&color).copied()
    }

    /// Hit and miss counters since creation or the last [`clear()`](Self::clear).
    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Forget all memoized colors and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    /// Resolve `color`, consulting the cache first.
    ///
    /// On a hit the stored color is returned and `resolver` is not called.
    /// On a miss `resolver` is called exactly once, and the result is stored
    /// for `color` and every color of [`neighborhood()`], replacing whatever
    /// those keys held before.
    ///
    /// # Errors
    ///
    /// Propagates the resolver's error; nothing is stored in that case.
    pub fn resolve<R>(&mut self, color: Rgb, resolver: &R) -> Result<Rgb, MatchError>
    where
        R: NearestColor + ?Sized,
    {
        if let Some(&hit) = self.entries.get(&color) {
            self.stats.hits += 1;
            return Ok(hit);
        }

        self.stats.misses += 1;
        let resolved = resolver.nearest(color)?;
        for neighbor in neighborhood(color, self.radius) {
            self.entries.insert(neighbor, resolved);
        }

        Ok(resolved)
    }
}

impl Default for NeighborhoodCache {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

/// Colors that share a cache entry with `center` after a miss.
///
/// Yields `center` first, then for every offset `k` in `-radius..radius`
/// (upper bound exclusive) the seven variants of `center` with `k` added to
/// R, G, B, R+G, G+B, R+B and R+G+B. That is at most `1 + 14 * radius`
/// colors, with repeats at `k == 0`. Variants with any channel outside
/// 0..=255 are skipped: no 8-bit pixel can ever look them up.
///
/// # Example
///
/// ```
/// use lab_match::{neighborhood, Rgb};
///
/// assert_eq!(neighborhood(Rgb::new(100, 100, 100), 35).count(), 491);
/// assert_eq!(neighborhood(Rgb::new(100, 100, 100), 0).count(), 1);
/// ```
pub fn neighborhood(center: Rgb, radius: u8) -> impl Iterator<Item = Rgb> {
    let (r, g, b) = (center.r as i16, center.g as i16, center.b as i16);
    let radius = radius as i16;

    std::iter::once(center).chain((-radius..radius).flat_map(move |k| {
        [
            (r + k, g, b),
            (r, g + k, b),
            (r, g, b + k),
            (r + k, g + k, b),
            (r, g + k, b + k),
            (r + k, g, b + k),
            (r + k, g + k, b + k),
        ]
        .into_iter()
        .filter_map(in_gamut)
    }))
}

fn in_gamut((r, g, b): (i16, i16, i16)) -> Option<Rgb> {
    Some(Rgb::new(
        u8::try_from(r).ok()?,
        u8::try_from(g).ok()?,
        u8::try_from(b).ok()?,
    ))
}
