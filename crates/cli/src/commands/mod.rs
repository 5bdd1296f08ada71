//! CLI command handlers

pub mod report;
pub mod screen;

use amlguard_screening::ScreeningConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration from `--config`, or defaults
pub fn load_config(path: Option<&Path>) -> Result<ScreeningConfig> {
    match path {
        Some(path) => ScreeningConfig::from_file(path)
            .with_context(|| format!("Failed to load screening config from {:?}", path)),
        None => Ok(ScreeningConfig::default()),
    }
}
