use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use healthform_core::DEFAULT_MAX_UPLOAD_MB;
use tracing::info;

/// Settings that the request handlers need. Resolved once in `main` and handed
/// to the router as state.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl ServiceConfig {
    pub fn new<P: Into<PathBuf>>(upload_dir: P) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

/// Creates the upload directory, and any missing parents, so that the first
/// submission has somewhere to go. Safe to call when it already exists.
pub fn prepare_upload_dir<P: AsRef<Path>>(upload_dir: P) -> Result<()> {
    let upload_dir = upload_dir.as_ref();
    std::fs::create_dir_all(upload_dir)
        .with_context(|| format!("Could not create upload directory {upload_dir:?}"))?;
    info!("Upload directory is {upload_dir:?}");
    Ok(())
}
