use crate::error::BatchError;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, RgbImage};
use lab_match::PixelBuffer;
use std::fs;
use std::path::{Path, PathBuf};

/// Image files in `dir` whose extension matches `extension`
///
/// The comparison ignores ASCII case, so `jpg` also finds `IMG_01.JPG`.
/// Results are sorted by path so output numbering is stable.
pub fn find_images(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(dir).map_err(|e| BatchError::io(dir, e))?;

    let mut images: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, extension))
        .collect();

    images.sort();
    Ok(images)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Output path for the `index`-th (1-based) image of a run
pub fn output_path(results_dir: &Path, palette: &str, index: usize, extension: &str) -> PathBuf {
    results_dir.join(format!("{palette}_image{index}.{extension}"))
}

/// Decode an image file into 8-bit RGB; alpha is dropped
pub fn load_image(path: &Path) -> Result<PixelBuffer, BatchError> {
    let decoded = image::open(path).map_err(|e| BatchError::image(path, e))?;
    let rgb = decoded.into_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(PixelBuffer::from_rgb_bytes(
        width as usize,
        height as usize,
        rgb.as_raw(),
    )?)
}

/// Encode a buffer in the format implied by the path's extension
pub fn save_image(path: &Path, buffer: &PixelBuffer) -> Result<(), BatchError> {
    let rgb = RgbImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.to_rgb_bytes(),
    )
    .ok_or_else(|| {
        BatchError::image(
            path,
            ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )),
        )
    })?;

    rgb.save(path).map_err(|e| BatchError::image(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_match::Rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("results"), "c64", 3, "jpg"),
            PathBuf::from("results/c64_image3.jpg")
        );
    }

    #[test]
    fn test_has_extension_ignores_case() {
        assert!(has_extension(Path::new("a/photo.JPG"), "jpg"));
        assert!(has_extension(Path::new("a/photo.jpg"), "JPG"));
        assert!(!has_extension(Path::new("a/photo.jpeg"), "jpg"));
        assert!(!has_extension(Path::new("a/jpg"), "jpg"));
    }

    #[test]
    fn test_find_images_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.PNG", "c.jpg", "notes.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("sub.png")).unwrap();

        let found = find_images(dir.path(), "png").unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.png"]);
    }

    #[test]
    fn test_find_images_missing_dir() {
        let result = find_images(Path::new("/nonexistent/palmap/images"), "png");
        assert!(matches!(result, Err(BatchError::Io { .. })));
    }

    #[test]
    fn test_save_then_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let buffer = PixelBuffer::new(
            2,
            2,
            vec![Rgb::BLACK, Rgb::WHITE, Rgb::new(136, 0, 0), Rgb::new(1, 2, 3)],
        )
        .unwrap();

        save_image(&path, &buffer).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(loaded, buffer);
    }

    #[test]
    fn test_load_garbage_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(load_image(&path), Err(BatchError::Image { .. })));
    }
}
