use crate::error::BatchError;
use lab_match::Palette;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extension of palette definitions
pub const PALETTE_EXTENSION: &str = "pal";

/// Directory of named `.pal` palette files
pub struct PaletteStore {
    dir: PathBuf,
}

impl PaletteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a palette name resolves to
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{PALETTE_EXTENSION}"))
    }

    /// Load and parse a palette by name
    ///
    /// A palette without entries is rejected here, before any image is
    /// touched.
    pub fn load(&self, name: &str) -> Result<Palette, BatchError> {
        let path = self.path_for(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(BatchError::PaletteNotFound {
                    name: name.to_string(),
                    path,
                });
            }
            Err(e) => return Err(BatchError::io(path, e)),
        };

        let palette = Palette::parse(&content).map_err(|source| BatchError::PaletteParse {
            name: name.to_string(),
            source,
        })?;
        if palette.is_empty() {
            return Err(BatchError::EmptyPalette(name.to_string()));
        }

        tracing::debug!(palette = name, colors = palette.len(), "Loaded palette");
        Ok(palette)
    }

    /// Names of all palettes in the directory, sorted
    pub fn list(&self) -> Result<Vec<String>, BatchError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| BatchError::io(&self.dir, e))?;

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(PALETTE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_match::Rgb;
    use pretty_assertions::assert_eq;

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, PaletteStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let store = PaletteStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_path_for() {
        let store = PaletteStore::new("palettes");
        assert_eq!(store.path_for("c64"), PathBuf::from("palettes/c64.pal"));
    }

    #[test]
    fn test_load_palette() {
        let (_dir, store) = store_with(&[("duo.pal", "Black 0, 0, 0,\nWhite 255, 255, 255,\n")]);

        let palette = store.load("duo").unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("White"), Some(Rgb::WHITE));
    }

    #[test]
    fn test_load_missing_palette() {
        let (_dir, store) = store_with(&[]);

        match store.load("nope") {
            Err(BatchError::PaletteNotFound { name, path }) => {
                assert_eq!(name, "nope");
                assert!(path.ends_with("nope.pal"));
            }
            other => panic!("Expected PaletteNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_malformed_palette() {
        let (_dir, store) = store_with(&[("bad.pal", "Black 0 0 0\nWhite 255 255\n")]);

        let err = store.load("bad").unwrap_err();
        assert!(matches!(err, BatchError::PaletteParse { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_load_empty_palette() {
        let (_dir, store) = store_with(&[("blank.pal", "\n\n")]);

        assert!(matches!(store.load("blank"), Err(BatchError::EmptyPalette(_))));
    }

    #[test]
    fn test_list_sorted_pal_files_only() {
        let (dir, store) = store_with(&[
            ("zx.pal", "Black 0 0 0\n"),
            ("c64.pal", "Black 0 0 0\n"),
            ("notes.txt", "not a palette"),
        ]);
        fs::create_dir(dir.path().join("dir.pal")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["c64".to_string(), "zx".to_string()]);
    }

    #[test]
    fn test_list_missing_dir() {
        let store = PaletteStore::new("/nonexistent/palmap/palettes");
        assert!(matches!(store.list(), Err(BatchError::Io { .. })));
    }
}
