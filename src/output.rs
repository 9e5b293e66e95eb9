// src/output.rs

use crate::core::error::OutputError;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Writes the rendered report to `path` as UTF-8, replacing any existing file.
pub fn write_report(path: &Path, report: &str) -> Result<(), OutputError> {
    fs::write(path, report).map_err(|source| {
        error!(path = %path.display(), error = %source, "Failed to write report file.");
        OutputError { path: path.to_path_buf(), source }
    })?;
    info!(path = %path.display(), bytes = %report.len(), "Report written.");
    Ok(())
}
