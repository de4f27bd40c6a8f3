//! Text format for palette definitions.
//!
//! One record per line, whitespace-separated fields. The first field is the
//! entry name and the last three are the R, G and B channels, each of which
//! may carry surrounding commas:
//!
//! ```text
//! Black        0,   0,   0,
//! White      255, 255, 255,
//! Red        136,   0,   0,
//! ```
//!
//! Fields between the name and the channels are ignored. Blank lines are
//! skipped.

use std::str::FromStr;

use super::error::ParseError;
use super::palette::Palette;
use crate::color::Rgb;

impl Palette {
    /// Parse a palette definition.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for the first malformed record: fewer than
    /// four fields, a channel that is not an integer in 0..=255, or a
    /// repeated name.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{Palette, Rgb};
    ///
    /// let palette = Palette::parse("Black 0, 0, 0,\nWhite 255, 255, 255,\n").unwrap();
    /// assert_eq!(palette.get("White"), Some(Rgb::WHITE));
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut records = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() < 4 {
                return Err(ParseError::TooFewFields {
                    line: line_no,
                    found: fields.len(),
                });
            }

            let n = fields.len();
            let r = parse_channel(fields[n - 3], line_no)?;
            let g = parse_channel(fields[n - 2], line_no)?;
            let b = parse_channel(fields[n - 1], line_no)?;

            records.push((line_no, fields[0].to_string(), Rgb::new(r, g, b)));
        }

        Palette::from_records(records)
    }
}

fn parse_channel(field: &str, line: usize) -> Result<u8, ParseError> {
    let value = field.trim_matches(',');
    value.parse().map_err(|source| ParseError::InvalidChannel {
        line,
        value: value.to_string(),
        source,
    })
}

impl FromStr for Palette {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::parse(s)
    }
}
