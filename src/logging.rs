//! Logging setup
//!
//! The library emits `tracing` events. A subscriber is only installed when
//! the host asks for one (`JNI_OnLoad`, the CLI), and only once per process.

use crate::error::{BridgeError, Result};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

lazy_static::lazy_static! {
    static ref INSTALLED: Mutex<bool> = Mutex::new(false);
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `my_rust_lib2=trace`
    pub filter: String,

    /// Colored output. Off by default since logcat and Xcode do not render it.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_string()),
            ansi: false,
        }
    }
}

impl LogConfig {
    /// Config for verbose desktop runs; `RUST_LOG` still wins when set.
    pub fn verbose() -> Self {
        Self {
            filter: std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "debug".to_string()),
            ansi: true,
        }
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Returns `Ok(false)` when a subscriber was already installed by an earlier
/// call, so hosts may call this on every load.
pub fn init_logging(config: &LogConfig) -> Result<bool> {
    let filter = EnvFilter::try_new(&config.filter)?;

    let mut installed = INSTALLED
        .lock()
        .map_err(|_| BridgeError::Logging("logger state poisoned".to_string()))?;
    if *installed {
        return Ok(false);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| BridgeError::Logging(e.to_string()))?;

    *installed = true;
    tracing::debug!(filter = %config.filter, "logging initialized");
    Ok(true)
}
