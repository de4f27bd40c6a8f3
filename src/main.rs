use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lab_match::{MatchError, Rgb};
use palmap::models::{BatchConfig, CacheScope};
use palmap::services::{BatchRunner, PaletteStore};

#[derive(Parser)]
#[command(name = "palmap")]
#[command(about = "Map images onto a named palette by perceptual color distance")]
struct Cli {
    /// YAML config file (default: palmap.yaml in the working directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding <name>.pal palette files
    #[arg(long, global = true)]
    palettes: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every image in a directory (the default when no command is given)
    Convert {
        /// Palette name
        #[arg(short, long)]
        palette: Option<String>,

        /// Input image directory
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Output directory (created when missing)
        #[arg(short, long)]
        results: Option<PathBuf>,

        /// Input image extension, also used for outputs
        #[arg(short, long)]
        extension: Option<String>,

        /// Neighborhood cache radius (0 = exact matching)
        #[arg(long)]
        radius: Option<u8>,

        /// Share one cache across images or start fresh per image
        #[arg(long, value_enum)]
        cache_scope: Option<CacheScope>,
    },
    /// List available palettes
    Palettes,
    /// Print the nearest palette entry for one color
    Match {
        /// Color as hex, e.g. "#7f3a10" or "f80"
        color: String,

        /// Palette name
        #[arg(short, long)]
        palette: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palmap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut config = BatchConfig::load(cli.config.as_deref())?;
    if let Some(palettes) = cli.palettes {
        config.palettes_dir = palettes;
    }

    match cli.command {
        Some(Commands::Convert {
            palette,
            images,
            results,
            extension,
            radius,
            cache_scope,
        }) => {
            if let Some(palette) = palette {
                config.palette = palette;
            }
            if let Some(images) = images {
                config.images_dir = images;
            }
            if let Some(results) = results {
                config.results_dir = results;
            }
            if let Some(extension) = extension {
                config.extension = extension;
            }
            if let Some(radius) = radius {
                config.radius = radius;
            }
            if let Some(cache_scope) = cache_scope {
                config.cache_scope = cache_scope;
            }
            run_convert_command(config)
        }
        Some(Commands::Palettes) => run_palettes_command(&config),
        Some(Commands::Match { color, palette }) => {
            if let Some(palette) = palette {
                config.palette = palette;
            }
            run_match_command(&config, &color)
        }
        None => run_convert_command(config),
    }
}

/// Convert all images with the configured palette
fn run_convert_command(config: BatchConfig) -> anyhow::Result<()> {
    let report = BatchRunner::new(config).run()?;

    for outcome in &report.converted {
        println!(
            "{} -> {} ({:.2}s)",
            outcome.source.display(),
            outcome.output.display(),
            outcome.elapsed.as_secs_f64()
        );
    }
    for skipped in &report.skipped {
        eprintln!("skipped {}: {}", skipped.source.display(), skipped.reason);
    }
    println!(
        "Converted {} image(s), skipped {}, in {:.2}s",
        report.converted.len(),
        report.skipped.len(),
        report.elapsed.as_secs_f64()
    );

    Ok(())
}

/// List palette names in the palettes directory
fn run_palettes_command(config: &BatchConfig) -> anyhow::Result<()> {
    let store = PaletteStore::new(&config.palettes_dir);
    let names = store.list()?;

    if names.is_empty() {
        eprintln!("No palettes in {}", store.dir().display());
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

/// Resolve a single color against the configured palette
fn run_match_command(config: &BatchConfig, color: &str) -> anyhow::Result<()> {
    let query: Rgb = color
        .parse()
        .with_context(|| format!("invalid color {color:?}"))?;

    let palette = PaletteStore::new(&config.palettes_dir).load(&config.palette)?;
    let (idx, distance) = palette
        .find_nearest(query)
        .ok_or(MatchError::EmptyPalette)?;
    let entry = &palette.entries()[idx];

    println!(
        "{query} -> {} {} (distance {distance:.4})",
        entry.name(),
        entry.color()
    );
    Ok(())
}
