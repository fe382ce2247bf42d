//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Build the expected source path for one candidate filename.
///
/// Layout: `<base>/<subject>/<session_dir>/<task_dir>/<filename>`.
pub fn source_path(
    config: &Config,
    subject: &str,
    session_dir: &str,
    filename: &str,
) -> Result<PathBuf> {
    Ok(config
        .base_directory()?
        .join(subject)
        .join(session_dir)
        .join(&config.layout.task_dir)
        .join(filename))
}

/// Build the destination path for a collected filename.
pub fn dest_path(config: &Config, filename: &str) -> Result<PathBuf> {
    Ok(config.dest_directory()?.join(filename))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
