//! Nearest-color resolution and its memoization.
//!
//! [`NearestColor`] is the seam: [`Palette`](crate::Palette) implements it
//! with a full scan, and [`NeighborhoodCache`] sits in front of any
//! implementation to skip scans for colors close to ones already seen.

mod cache;
mod resolver;

pub use cache::{neighborhood, CacheStats, NeighborhoodCache, DEFAULT_RADIUS};
pub use resolver::{resolve, MatchError, NearestColor};
