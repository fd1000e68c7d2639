//! Settings file utilities

use std::path::PathBuf;

/// Directory for rolling log files, falling back to the working directory
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dbdesk")
        .join("logs")
}
