//! # Dirwatcher
//!
//! Polls a directory at a fixed interval for files containing a magic
//! string, and reports each occurrence exactly once. Per-file cursors record
//! how many lines have already been searched, so repeated polls never
//! re-report the same line and never miss appended content.
//!
//! ## Features
//!
//! - **Interval Polling**: purely time-based, no filesystem notifications
//! - **Incremental Scanning**: only lines past each file's cursor are searched
//! - **Membership Tracking**: files are tracked as they appear and dropped as they vanish
//! - **Failure Isolation**: one bad poll cycle never terminates the watcher
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Directory Watcher                         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  WatchConfig ──► run_cycle ──► WatchEvent                       │
//! │       │             │              │                            │
//! │       ▼             ▼              ▼                            │
//! │  CursorTable    reconcile      scan_file                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod event;
pub mod poll;
pub mod scanner;
pub mod tracker;
pub mod watcher;

pub use config::WatchConfig;
pub use cursor::CursorTable;
pub use error::{Result, WatcherError};
pub use event::{WatchEvent, WatchEventKind};
pub use poll::run_cycle;
pub use watcher::DirectoryWatcher;
