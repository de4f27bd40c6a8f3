//! Palmap - perceptual palette mapping
//!
//! Batch front end for the `lab-match` crate: loads named palettes and
//! images from disk, converts every pixel to its nearest palette color and
//! writes the results. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
