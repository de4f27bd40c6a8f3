//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs. It holds the exact
//! IEC 61966-2-1 expansion of every 8-bit sRGB value, scaled to percent.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel to linear light on the 0..=100 scale.
#[inline]
pub fn srgb_to_linear_percent(channel: u8) -> f64 {
    SRGB_TO_LINEAR_PERCENT[channel as usize]
}
