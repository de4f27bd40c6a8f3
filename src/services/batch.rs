use crate::error::BatchError;
use crate::models::{BatchConfig, CacheScope};
use crate::services::image_store::{find_images, load_image, output_path, save_image};
use crate::services::PaletteStore;
use lab_match::{ConversionStats, PaletteConverter};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// One converted image
#[derive(Debug, Clone)]
pub struct ImageOutcome {
    /// 1-based position in the sorted input list
    pub index: usize,
    pub source: PathBuf,
    pub output: PathBuf,
    pub stats: ConversionStats,
    /// Decode, convert and encode time
    pub elapsed: Duration,
}

/// An input that could not be decoded
#[derive(Debug, Clone)]
pub struct SkippedImage {
    pub index: usize,
    pub source: PathBuf,
    pub reason: String,
}

/// Summary of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub converted: Vec<ImageOutcome>,
    pub skipped: Vec<SkippedImage>,
    pub elapsed: Duration,
}

impl BatchReport {
    /// Pixels converted across all images
    pub fn total_pixels(&self) -> usize {
        self.converted.iter().map(|o| o.stats.pixels).sum()
    }
}

/// Converts every matching image of a directory with one palette
pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run the batch
    ///
    /// The palette is loaded before any image is read, so a bad palette
    /// produces no output at all. Images that fail to decode are skipped and
    /// keep their number; failing to write an output aborts the run.
    pub fn run(&self) -> Result<BatchReport, BatchError> {
        let config = &self.config;
        let started = Instant::now();

        let palette = PaletteStore::new(&config.palettes_dir).load(&config.palette)?;
        let converter = PaletteConverter::new(palette).radius(config.radius);

        let images = find_images(&config.images_dir, &config.extension)?;
        if images.is_empty() {
            tracing::warn!(
                dir = %config.images_dir.display(),
                extension = %config.extension,
                "No images found"
            );
        }

        fs::create_dir_all(&config.results_dir)
            .map_err(|e| BatchError::io(&config.results_dir, e))?;

        tracing::info!(
            palette = %config.palette,
            colors = converter.palette().len(),
            images = images.len(),
            radius = config.radius,
            cache_scope = ?config.cache_scope,
            "Starting batch"
        );

        let mut report = BatchReport::default();
        let mut cache = converter.new_cache();

        for (i, source) in images.into_iter().enumerate() {
            let index = i + 1;
            let image_started = Instant::now();

            let mut buffer = match load_image(&source) {
                Ok(buffer) => buffer,
                Err(e) => {
                    tracing::warn!(
                        image = index,
                        source = %source.display(),
                        %e,
                        "Skipping image"
                    );
                    report.skipped.push(SkippedImage {
                        index,
                        source,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if config.cache_scope == CacheScope::PerImage {
                cache.clear();
            }
            let stats = converter.convert(&mut buffer, &mut cache)?;

            let output = output_path(
                &config.results_dir,
                &config.palette,
                index,
                &config.extension,
            );
            save_image(&output, &buffer)?;

            let elapsed = image_started.elapsed();
            tracing::info!(
                image = index,
                source = %source.display(),
                output = %output.display(),
                seconds = elapsed.as_secs_f64(),
                hits = stats.hits,
                misses = stats.misses,
                cached = cache.len(),
                "Converted image"
            );

            report.converted.push(ImageOutcome {
                index,
                source,
                output,
                stats,
                elapsed,
            });
        }

        report.elapsed = started.elapsed();
        tracing::info!(
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            pixels = report.total_pixels(),
            seconds = report.elapsed.as_secs_f64(),
            "Batch finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_total_pixels() {
        let outcome = |pixels| ImageOutcome {
            index: 1,
            source: PathBuf::from("in.png"),
            output: PathBuf::from("out.png"),
            stats: ConversionStats {
                pixels,
                hits: 0,
                misses: 0,
            },
            elapsed: Duration::ZERO,
        };
        let report = BatchReport {
            converted: vec![outcome(4), outcome(6)],
            ..Default::default()
        };
        assert_eq!(report.total_pixels(), 10);
    }

    #[test]
    fn test_missing_palette_aborts_before_images() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig {
            palettes_dir: dir.path().join("palettes"),
            images_dir: dir.path().join("images"),
            results_dir: dir.path().join("results"),
            ..Default::default()
        };

        let err = BatchRunner::new(config).run().unwrap_err();

        assert!(matches!(err, BatchError::PaletteNotFound { .. }));
        assert!(!dir.path().join("results").exists());
    }
}
