//! Assertion helpers for tests.

use lab_match::{Palette, Rgb};
use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert every pixel of the image at `path` is a palette color
pub fn assert_only_palette_colors(path: &Path, palette: &Palette) {
    let image = image::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()))
        .into_rgb8();

    for (x, y, px) in image.enumerate_pixels() {
        let color = Rgb::from(px.0);
        assert!(
            palette.contains_color(color),
            "Pixel ({x}, {y}) of {} is {color}, which is not in the palette",
            path.display()
        );
    }
}

/// Assert the image at `path` has the given dimensions
pub fn assert_dimensions(path: &Path, width: u32, height: u32) {
    let image = image::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    assert_eq!(
        (image.width(), image.height()),
        (width, height),
        "Unexpected dimensions for {}",
        path.display()
    );
}
