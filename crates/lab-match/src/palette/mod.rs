//! Palette types and utilities
//!
//! This module provides the immutable named [`Palette`], its text format
//! parser, and the error types for both.

mod error;
mod palette;
mod parse;

pub use error::{ParseColorError, ParseError};
pub use palette::{Palette, PaletteEntry};
