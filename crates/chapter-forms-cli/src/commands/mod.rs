pub mod check;
pub mod render;
pub mod template;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use chapter_forms::Application;

/// Read a draft application from a JSON file
pub fn load_draft(path: &Path) -> Result<Application> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft: {:?}", path))?;

    serde_json::from_str(&content).with_context(|| format!("Failed to parse draft: {:?}", path))
}
