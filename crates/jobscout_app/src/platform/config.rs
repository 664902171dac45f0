use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use jobscout_core::SiteProfile;
use jobscout_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const CONFIG_ENV: &str = "JOBSCOUT_CONFIG";
const DEFAULT_CONFIG_FILENAME: &str = "jobscout.ron";
const DEFAULT_STORE_FILENAME: &str = "jobscout_store.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum StoreConfig {
    Memory,
    JsonFile { path: PathBuf },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::JsonFile {
            path: PathBuf::from(DEFAULT_STORE_FILENAME),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub log_destination: LogDestination,
    pub log_level: String,
    pub log_dir: PathBuf,
    pub store: StoreConfig,
    pub profile: SiteProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
            log_dir: PathBuf::from("."),
            store: StoreConfig::default(),
            profile: SiteProfile::linkedin(),
        }
    }
}

impl AppConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLevel(self.log_level.clone()))
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("unknown log level {0:?}")]
    InvalidLevel(String),
}

/// `$JOBSCOUT_CONFIG` if set, else `./jobscout.ron`.
pub(crate) fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME))
}

/// Loads the config; a missing file gives the defaults.
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    config.level_filter()?;
    Ok(config)
}
