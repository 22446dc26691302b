use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "grid-snake";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Log verbosity accepted on the command line and in settings.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Installs a file logger; stdout belongs to the game screen.
///
/// Earlier sessions are kept: the log is appended to, never truncated.
pub fn init(path: &Path, level: LogLevel) -> Result<(), AppError> {
    if level == LogLevel::Off {
        return Ok(());
    }

    let file = open_log_file(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    WriteLogger::init(level.into(), Config::default(), file)?;
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
