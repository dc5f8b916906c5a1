//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::{debug, warn};

/// Ensure the data directory exists, creating it when missing.
pub fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    if data_dir.trim().is_empty() {
        return Err(anyhow::anyhow!("data directory path is empty"));
    }
    let path = Path::new(data_dir);
    if path.is_file() {
        return Err(anyhow::anyhow!("{data_dir} exists and is not a directory"));
    }
    if !path.exists() {
        warn!(%data_dir, "data directory not found; creating it");
    }
    std::fs::create_dir_all(path).map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    debug!(%data_dir, "data directory ready");
    Ok(())
}
