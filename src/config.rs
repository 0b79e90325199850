//! Configuration for the directory watcher.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WatcherError};

/// Configuration for one watch run. Immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Directory to poll.
    pub path: PathBuf,

    /// Text to search for in watched files.
    pub magic_string: String,

    /// Only files with this extension are tracked and scanned.
    pub extension: String,

    /// Pause between poll cycles.
    pub interval: Duration,
}

impl WatchConfig {
    /// Create a config with the default extension and interval.
    pub fn new(path: impl Into<PathBuf>, magic_string: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            magic_string: magic_string.into(),
            extension: ".txt".to_string(),
            interval: Duration::from_secs(1),
        }
    }

    /// Set the extension filter.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the polling interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Validate the configuration before the watch loop starts.
    ///
    /// A missing or unreadable directory is deliberately not rejected here:
    /// that is a transient condition reported each cycle, and the watcher
    /// recovers as soon as the directory becomes listable.
    pub fn validate(&self) -> Result<()> {
        if self.magic_string.is_empty() {
            return Err(WatcherError::Config(
                "magic string must not be empty".to_string(),
            ));
        }

        if self.interval.is_zero() {
            return Err(WatcherError::Config(
                "interval must be greater than zero".to_string(),
            ));
        }

        if self.path.exists() && !self.path.is_dir() {
            return Err(WatcherError::NotADirectory(self.path.display().to_string()));
        }

        Ok(())
    }

    /// Check whether a filename passes the extension filter.
    pub fn matches_extension(&self, filename: &str) -> bool {
        filename.ends_with(&self.extension)
    }
}
