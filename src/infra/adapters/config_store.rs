use std::fs;
use std::path::PathBuf;

use tracing::debug;

use pinwheel_app::config::Config;
use pinwheel_app::ports::{ConfigStore, ConfigStoreError};

use crate::config::{CURRENT_VERSION, ConfigFile};

const APP_DIR_NAME: &str = "pinwheel";
const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    /// Uses `<config_dir>/pinwheel/config.toml`.
    pub fn new() -> Result<Self, ConfigStoreError> {
        let config_base = dirs::config_dir()
            .ok_or_else(|| ConfigStoreError::IoError("Could not find config directory".into()))?;
        Ok(Self {
            path: config_base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME),
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<Option<Config>, ConfigStoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "config: no file, using defaults");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| ConfigStoreError::ReadError(e.to_string()))?;

        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| ConfigStoreError::InvalidFormat(e.to_string()))?;

        if file.version != CURRENT_VERSION {
            return Err(ConfigStoreError::VersionMismatch {
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }

        debug!(path = %self.path.display(), "config: loaded");
        Ok(Some(file.to_config()))
    }

    fn storage_path(&self) -> PathBuf {
        self.path.clone()
    }
}
