use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::logging::LogLevel;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Runtime knobs. Game rules are fixed and never configurable.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where to write the log; defaults to the platform data directory.
    pub log_file: Option<PathBuf>,
    pub log_level: LogLevel,
    /// Fixed food seed for reproducible sessions.
    pub seed: Option<u64>,
}

/// Values given on the command line, which win over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
    pub seed: Option<u64>,
}

impl Settings {
    #[must_use]
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            log_file: overrides.log_file.or(self.log_file),
            log_level: overrides.log_level.unwrap_or(self.log_level),
            seed: overrides.seed.or(self.seed),
        }
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// A missing file yields defaults. A file that exists but cannot be read or
/// parsed is an error, reported before the terminal enters raw mode.
pub fn load_settings(path: &Path) -> Result<Settings, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(AppError::SettingsRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| AppError::Settings {
        path: path.to_path_buf(),
        source,
    })
}
