use crate::error::ConfigError;
use lab_match::DEFAULT_RADIUS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "palmap.yaml";

/// How long a neighborhood cache lives during a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CacheScope {
    /// One cache for every image of the run
    #[default]
    Shared,
    /// A fresh cache for each image
    PerImage,
}

/// Batch configuration loaded from palmap.yaml
///
/// Every field is optional in the file; missing fields take the defaults
/// below, and command-line flags override both.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BatchConfig {
    /// Palette name, resolved to `<palettes_dir>/<palette>.pal`
    pub palette: String,

    /// Directory holding `.pal` files
    pub palettes_dir: PathBuf,

    /// Directory scanned for input images
    pub images_dir: PathBuf,

    /// Directory receiving converted images (created when missing)
    pub results_dir: PathBuf,

    /// Input file extension, also used for the output files
    pub extension: String,

    /// Neighborhood radius of the cache (0 = exact matching)
    pub radius: u8,

    /// Cache lifetime across images
    pub cache_scope: CacheScope,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            palette: "c64".to_string(),
            palettes_dir: PathBuf::from("palettes"),
            images_dir: PathBuf::from("images"),
            results_dir: PathBuf::from("results"),
            extension: "jpg".to_string(),
            radius: DEFAULT_RADIUS,
            cache_scope: CacheScope::Shared,
        }
    }
}

impl BatchConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, `palmap.yaml` in the working
    /// directory is used when present, and the defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::load_file(implicit)
                } else {
                    tracing::debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a YAML file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            palette = %config.palette,
            radius = config.radius,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text; blank text yields the defaults
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Path of the configured palette file
    pub fn palette_path(&self) -> PathBuf {
        self.palettes_dir.join(format!("{}.pal", self.palette))
    }
}
