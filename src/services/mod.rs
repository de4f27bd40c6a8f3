pub mod batch;
pub mod image_store;
pub mod palette_store;

pub use batch::{BatchReport, BatchRunner, ImageOutcome, SkippedImage};
pub use palette_store::PaletteStore;
