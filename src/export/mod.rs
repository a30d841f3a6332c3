//! Snapshot artifact writing.
//!
//! Each run fully replaces the artifacts; there is no merge with prior
//! content.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

/// Serializes `value` as JSON to `path`, creating parent directories as
/// needed. Returns the number of bytes written.
pub fn write_artifact<T: Serialize>(path: &Path, value: &T) -> Result<usize> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    let body = serde_json::to_vec(value).context("Failed to serialize snapshot")?;
    fs::write(path, &body).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("  → {} ({:.1} KB)", path.display(), body.len() as f64 / 1024.0);
    Ok(body.len())
}
