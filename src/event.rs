//! Events emitted by the watcher core.
//!
//! The core produces semantic payloads only; rendering, formatting, and
//! timestamping of the log output belong to the `tracing` subscriber.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// A single event observed during watching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchEvent {
    /// What happened.
    pub kind: WatchEventKind,

    /// When the core observed it.
    pub timestamp: DateTime<Utc>,
}

/// Kind of watch event, with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchEventKind {
    /// A matching file appeared in the watched directory.
    FileAdded { filename: String, path: PathBuf },

    /// A tracked file disappeared from the watched directory.
    FileRemoved { filename: String, path: PathBuf },

    /// The magic string was found on a previously unscanned line.
    MagicFound {
        magic_string: String,
        line: u64,
        filename: String,
    },

    /// A tracked file could not be opened or read.
    FileUnreadable { filename: String },

    /// The watched directory could not be listed.
    DirectoryUnreadable { path: PathBuf },

    /// A poll cycle failed in an unanticipated way.
    CycleFailed { error: String },

    /// The watch loop started.
    Startup {
        path: PathBuf,
        extension: String,
        magic_string: String,
        interval: Duration,
    },

    /// The watch loop stopped; carries total wall-clock uptime.
    Shutdown { uptime: Duration },
}

impl WatchEvent {
    fn new(kind: WatchEventKind) -> Self {
        Self {
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn file_added(filename: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(WatchEventKind::FileAdded {
            filename: filename.into(),
            path: path.into(),
        })
    }

    pub fn file_removed(filename: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(WatchEventKind::FileRemoved {
            filename: filename.into(),
            path: path.into(),
        })
    }

    pub fn magic_found(magic_string: impl Into<String>, line: u64, filename: impl Into<String>) -> Self {
        Self::new(WatchEventKind::MagicFound {
            magic_string: magic_string.into(),
            line,
            filename: filename.into(),
        })
    }

    pub fn file_unreadable(filename: impl Into<String>) -> Self {
        Self::new(WatchEventKind::FileUnreadable {
            filename: filename.into(),
        })
    }

    pub fn directory_unreadable(path: impl Into<PathBuf>) -> Self {
        Self::new(WatchEventKind::DirectoryUnreadable { path: path.into() })
    }

    pub fn cycle_failed(error: impl Into<String>) -> Self {
        Self::new(WatchEventKind::CycleFailed {
            error: error.into(),
        })
    }

    pub fn startup(
        path: impl Into<PathBuf>,
        extension: impl Into<String>,
        magic_string: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self::new(WatchEventKind::Startup {
            path: path.into(),
            extension: extension.into(),
            magic_string: magic_string.into(),
            interval,
        })
    }

    pub fn shutdown(uptime: Duration) -> Self {
        Self::new(WatchEventKind::Shutdown { uptime })
    }

    /// Hand this event to the logging layer at the appropriate level.
    pub fn log(&self) {
        match &self.kind {
            WatchEventKind::FileAdded { filename, path } => {
                info!("New file: {filename} found in {}", path.display());
            }
            WatchEventKind::FileRemoved { filename, path } => {
                info!("File: {filename} removed from {}", path.display());
            }
            WatchEventKind::MagicFound {
                magic_string,
                line,
                filename,
            } => {
                info!("Magic string: {magic_string} found on line: {line} in file: {filename}");
            }
            WatchEventKind::FileUnreadable { filename } => {
                warn!("File unreadable: {filename}");
            }
            WatchEventKind::DirectoryUnreadable { path } => {
                warn!("Directory unreadable: {}", path.display());
            }
            WatchEventKind::CycleFailed { error } => {
                error!("Unhandled cycle failure: {error}");
            }
            WatchEventKind::Startup {
                path,
                extension,
                magic_string,
                interval,
            } => {
                info!(
                    "Watching directory: {} for files ending with: {extension} containing magic text: {magic_string} every {:?}",
                    path.display(),
                    interval
                );
            }
            WatchEventKind::Shutdown { uptime } => {
                info!("Shutting down, uptime was {uptime:?}");
            }
        }
    }

    /// The filename this event refers to, if any.
    pub fn filename(&self) -> Option<&str> {
        match &self.kind {
            WatchEventKind::FileAdded { filename, .. }
            | WatchEventKind::FileRemoved { filename, .. }
            | WatchEventKind::MagicFound { filename, .. }
            | WatchEventKind::FileUnreadable { filename } => Some(filename),
            _ => None,
        }
    }

    /// The watched path this event refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match &self.kind {
            WatchEventKind::FileAdded { path, .. }
            | WatchEventKind::FileRemoved { path, .. }
            | WatchEventKind::DirectoryUnreadable { path }
            | WatchEventKind::Startup { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_payloads() {
        let event = WatchEvent::magic_found("MAGIC", 4, "a.txt");
        assert_eq!(
            event.kind,
            WatchEventKind::MagicFound {
                magic_string: "MAGIC".to_string(),
                line: 4,
                filename: "a.txt".to_string(),
            }
        );
        assert_eq!(event.filename(), Some("a.txt"));
        assert_eq!(event.path(), None);
    }

    #[test]
    fn test_file_added_accessors() {
        let event = WatchEvent::file_added("b.txt", "/watched");
        assert_eq!(event.filename(), Some("b.txt"));
        assert_eq!(event.path(), Some(Path::new("/watched")));
    }
}
