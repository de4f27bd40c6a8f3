//! Color types and conversion utilities
//!
//! - **Rgb**: 8-bit sRGB, the representation of pixels and palette entries.
//! - **Lab**: CIE L*a*b*, used only to measure perceptual distance.
//!
//! # Example
//!
//! ```
//! use lab_match::{Lab, Rgb};
//!
//! let pixel = Rgb::new(128, 64, 32);
//! let lab = Lab::from(pixel);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod lab;
mod lut;
mod rgb;

pub use lab::Lab;
pub use rgb::Rgb;
