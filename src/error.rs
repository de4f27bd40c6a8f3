use std::path::PathBuf;

use lab_match::{BufferError, MatchError, ParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Palette not found: {name} (looked for {})", .path.display())]
    PaletteNotFound { name: String, path: PathBuf },

    #[error("Palette {name} is invalid: {source}")]
    PaletteParse {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("Palette {0} has no colors")]
    EmptyPalette(String),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image error at {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}

impl BatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BatchError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        BatchError::Image {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
