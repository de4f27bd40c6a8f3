//! Palette struct with named entries and nearest-color matching.
//!
//! A `Palette` is an ordered, immutable list of named sRGB colors. Lab values
//! are computed once at construction so per-pixel matching never converts
//! palette colors again.

use std::collections::HashSet;

use super::error::ParseError;
use crate::color::{Lab, Rgb};

/// One named palette color with its precomputed Lab value.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    name: String,
    color: Rgb,
    lab: Lab,
}

impl PaletteEntry {
    /// The entry's name, e.g. `"Black"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry's sRGB color.
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// The entry's color in Lab.
    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }
}

/// An ordered set of named reference colors.
///
/// Iteration order is definition order, which also decides ties during
/// nearest-color matching: the first entry at the minimum distance wins.
///
/// Names are unique. Colors need not be: two names may share a color.
///
/// An empty palette can be constructed (an empty palette file is valid), but
/// every match against it fails with
/// [`MatchError::EmptyPalette`](crate::MatchError::EmptyPalette).
///
/// # Example
///
/// ```
/// use lab_match::{Palette, Rgb};
///
/// let palette = Palette::new([("black", Rgb::BLACK), ("white", Rgb::WHITE)]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.get("white"), Some(Rgb::WHITE));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette from `(name, color)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DuplicateName`] if a name repeats; `line` is the
    /// 1-based position of the repeated pair.
    pub fn new<I, S>(entries: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: Into<String>,
    {
        Self::from_records(
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (name, color))| (i + 1, name.into(), color)),
        )
    }

    /// Build from `(line, name, color)` records, rejecting duplicate names.
    pub(crate) fn from_records<I>(records: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (usize, String, Rgb)>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (line, name, color) in records {
            if !seen.insert(name.clone()) {
                return Err(ParseError::DuplicateName { line, name });
            }
            entries.push(PaletteEntry {
                name,
                color,
                lab: Lab::from(color),
            });
        }

        Ok(Self { entries })
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in definition order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Iterate over `(name, color)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.entries.iter().map(|e| (e.name.as_str(), e.color))
    }

    /// Look up a color by entry name.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.color)
    }

    /// Returns true if `color` is exactly one of the palette's colors.
    pub fn contains_color(&self, color: Rgb) -> bool {
        self.entries.iter().any(|e| e.color == color)
    }

    /// Name of the first entry with exactly this color.
    pub fn name_of(&self, color: Rgb) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.color == color)
            .map(|e| e.name.as_str())
    }

    /// Find the palette entry perceptually nearest to `color`.
    ///
    /// Returns `(index, distance)`, or `None` for an empty palette. The
    /// comparison is strictly-less, so on a tie the earliest entry wins.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{Palette, Rgb};
    ///
    /// let palette = Palette::new([("black", Rgb::BLACK), ("white", Rgb::WHITE)]).unwrap();
    /// let (idx, _) = palette.find_nearest(Rgb::new(10, 10, 10)).unwrap();
    /// assert_eq!(idx, 0);
    /// ```
    pub fn find_nearest(&self, color: Rgb) -> Option<(usize, f64)> {
        let query = Lab::from(color);

        // Linear scan - palettes hold tens of entries at most
        let mut best: Option<(usize, f64)> = None;
        for (i, entry) in self.entries.iter().enumerate() {
            let dist = query.distance(entry.lab);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }

        best
    }
}
