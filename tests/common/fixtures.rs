//! Test fixtures and constants.

use image::{Rgb as ImageRgb, RgbImage};

/// Palette texts in the on-disk `.pal` format
pub mod palettes {
    /// Commodore 64 palette, trailing commas as found in the wild
    pub const C64: &str = "\
Black 0, 0, 0,
White 255, 255, 255,
Red 136, 0, 0,
Cyan 170, 255, 238,
Purple 204, 68, 204,
Green 0, 204, 85,
Blue 0, 0, 170,
Yellow 238, 238, 119,
Orange 221, 136, 85,
Brown 102, 68, 0,
LightRed 255, 119, 119,
DarkGrey 51, 51, 51,
Grey 119, 119, 119,
LightGreen 170, 255, 102,
LightBlue 0, 136, 255,
LightGrey 187, 187, 187,
";

    /// Two-color palette
    pub const MONO: &str = "Black 0 0 0\nWhite 255 255 255\n";

    /// Black, white, dark red and pale cyan
    pub const FOUR: &str = "\
Black 0, 0, 0,
White 255, 255, 255,
Red 136, 0, 0,
Cyan 170, 255, 238,
";

    /// Record with a missing channel on line 2
    pub const TRUNCATED: &str = "Black 0 0 0\nWhite 255 255\n";

    /// Only blank lines
    pub const BLANK: &str = "\n\n";
}

/// Horizontal hue sweep over a vertical lightness ramp
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8;
        let g = (y * 255 / height.max(2).saturating_sub(1)).min(255) as u8;
        let b = 255 - r / 2;
        ImageRgb([r, g, b])
    })
}

/// Single-color image
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, ImageRgb(rgb))
}
