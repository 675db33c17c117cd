//! File logging for the demo binary.
//!
//! The terminal belongs to the TUI, so logs never go to stdout or stderr.
//! Logging stays off unless a log file is given or `PINWHEEL_LOG` is set.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "PINWHEEL_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "pinwheel.log";

/// Keeps the background writer alive; logs are flushed when dropped.
pub struct LogGuard {
    _guard: WorkerGuard,
    pub path: PathBuf,
}

/// Where logs go: the explicit path, else the cache dir when `PINWHEEL_LOG`
/// is set, else nowhere.
pub fn resolve_log_path(explicit: Option<&Path>, env_filter: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path.to_path_buf()));
    }
    if env_filter.is_none() {
        return Ok(None);
    }

    let cache_base = dirs::cache_dir().ok_or_else(|| eyre!("Could not find cache directory"))?;
    Ok(Some(cache_base.join("pinwheel").join(LOG_FILE_NAME)))
}

/// `PINWHEEL_LOG` directives, or `info` when unset. A malformed value is an
/// error rather than a silent fallback.
pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter> {
    let Some(directives) = directives else {
        return Ok(EnvFilter::new(DEFAULT_FILTER));
    };
    EnvFilter::try_new(directives)
        .wrap_err_with(|| format!("Invalid {LOG_ENV} value {directives:?}"))
}

pub fn init(explicit: Option<&Path>) -> Result<Option<LogGuard>> {
    let env_filter = std::env::var(LOG_ENV).ok();
    let Some(path) = resolve_log_path(explicit, env_filter.as_deref())? else {
        return Ok(None);
    };
    let filter = build_filter(env_filter.as_deref())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .wrap_err("Failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");

    Ok(Some(LogGuard {
        _guard: guard,
        path,
    }))
}
