use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Infrastructure failures. Losing a game is not an error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read settings file {}: {source}", .path.display())]
    SettingsRead { path: PathBuf, source: io::Error },

    #[error("invalid settings file {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
