// src/logging.rs

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    // AEGIS_LOGLEVEL, consulted when RUST_LOG is not set.
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Where the log file lives; `./.data` when the platform has no data dir.
pub fn log_directory() -> PathBuf {
    ProjectDirs::from("com", "aegis", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".").join(".data"))
}

fn level_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV.as_str()))
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))))
}

/// Sends all tracing output to a file, leaving stdout to the report.
///
/// Each run truncates the previous log. Returns the path written to.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = log_directory();
    fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = File::create(&log_path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(level_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_names_derive_from_crate() {
        assert_eq!(LOG_ENV.as_str(), "AEGIS_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "aegis-html-analyser.log");
    }

    #[test]
    fn test_log_directory_is_not_empty() {
        assert!(!log_directory().as_os_str().is_empty());
    }
}
