use std::path::PathBuf;

use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigStoreError {
    #[error("config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("read error: {0}")]
    ReadError(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    IoError(String),
}

pub trait ConfigStore {
    /// `Ok(None)` when no config file exists.
    fn load(&self) -> Result<Option<Config>, ConfigStoreError>;

    fn storage_path(&self) -> PathBuf;
}
