//! Temporary batch workspace for integration tests.

use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use palmap::models::BatchConfig;

/// A temp directory laid out like a palmap working directory:
/// `palettes/`, `images/` and (after a run) `results/`
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace with `palettes/` and `images/`
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("palettes")).expect("Failed to create palettes dir");
        fs::create_dir(dir.path().join("images")).expect("Failed to create images dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn palettes_dir(&self) -> PathBuf {
        self.root().join("palettes")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root().join("images")
    }

    pub fn results_dir(&self) -> PathBuf {
        self.root().join("results")
    }

    /// Write `<palettes>/<name>.pal`
    pub fn add_palette(&self, name: &str, content: &str) -> &Self {
        fs::write(self.palettes_dir().join(format!("{name}.pal")), content)
            .expect("Failed to write palette");
        self
    }

    /// Encode an image into `images/`, format from the file name
    pub fn add_image(&self, file_name: &str, image: &RgbImage) -> &Self {
        image
            .save(self.images_dir().join(file_name))
            .expect("Failed to write image");
        self
    }

    /// Write raw bytes into `images/`
    pub fn add_raw_image(&self, file_name: &str, bytes: &[u8]) -> &Self {
        fs::write(self.images_dir().join(file_name), bytes).expect("Failed to write file");
        self
    }

    /// Config pointing at this workspace, PNG in and out, given palette
    pub fn config(&self, palette: &str) -> BatchConfig {
        BatchConfig {
            palette: palette.to_string(),
            palettes_dir: self.palettes_dir(),
            images_dir: self.images_dir(),
            results_dir: self.results_dir(),
            extension: "png".to_string(),
            ..Default::default()
        }
    }

    /// Sorted file names in `results/`
    pub fn result_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.results_dir())
            .expect("Failed to read results dir")
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
