//! CIE L*a*b* color space
//!
//! Lab is used only for measuring how different two colors look. The
//! conversion goes sRGB -> linear RGB -> XYZ (D65) -> Lab, with XYZ and the
//! final components rounded to four decimals so results are reproducible
//! bit-for-bit.

use super::lut::srgb_to_linear_percent;
use super::rgb::Rgb;

/// D65 reference white, 2° observer, percent scale.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// Below this normalized XYZ value the Lab transfer function is linear.
const LINEAR_KNEE: f64 = 0.008865;

/// A color in CIE L*a*b*.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, roughly -128..=127
/// - `b`: Blue-yellow axis, roughly -128..=127
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Perceptual distance used for palette matching.
    ///
    /// Euclidean distance in the (a, b) plane plus the absolute lightness
    /// difference:
    ///
    /// `sqrt((a1 - a2)^2 + (b1 - b2)^2) + |L1 - L2|`
    ///
    /// This is a cheap approximation, not CIE94 or CIEDE2000. It is
    /// symmetric, non-negative and zero for identical colors, which is all
    /// nearest-neighbor ranking needs.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::Lab;
    ///
    /// let a = Lab::new(50.0, 3.0, 0.0);
    /// let b = Lab::new(40.0, 0.0, 4.0);
    /// assert_eq!(a.distance(b), 15.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f64 {
        let da = self.a - other.a;
        let db = self.b - other.b;
        let dl = self.l - other.l;
        (da * da + db * db).sqrt() + dl.abs()
    }
}

/// Round to four decimal places.
#[inline]
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Lab companding function applied to normalized XYZ.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LINEAR_KNEE {
        t.powf(1.0 / 3.0)
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Rgb> for Lab {
    /// Convert an 8-bit sRGB color to Lab.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{Lab, Rgb};
    ///
    /// let white = Lab::from(Rgb::WHITE);
    /// assert_eq!(white.l, 100.0);
    /// ```
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear_percent(rgb.r);
        let g = srgb_to_linear_percent(rgb.g);
        let b = srgb_to_linear_percent(rgb.b);

        let x = round4(r * 0.4124 + g * 0.3576 + b * 0.1805);
        let y = round4(r * 0.2126 + g * 0.7152 + b * 0.0722);
        let z = round4(r * 0.0193 + g * 0.1192 + b * 0.9505);

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: round4(116.0 * fy - 16.0),
            a: round4(500.0 * (fx - fy)),
            b: round4(200.0 * (fy - fz)),
        }
    }
}
