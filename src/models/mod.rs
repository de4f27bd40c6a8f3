pub mod config;

pub use config::{BatchConfig, CacheScope, DEFAULT_CONFIG_FILE};
