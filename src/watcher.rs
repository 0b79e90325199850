//! The watch loop.

use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::WatchConfig;
use crate::cursor::CursorTable;
use crate::error::Result;
use crate::event::WatchEvent;
use crate::poll::run_cycle;

/// Runs poll cycles on a timer until cancelled.
///
/// The loop is strictly sequential: cycle, then sleep, then cycle. The
/// cancellation token is observed between cycles and during the sleep, so a
/// cycle in progress always runs to completion. Any error escaping a cycle
/// is logged as a cycle failure and the loop carries on; a single bad cycle
/// never terminates the watcher.
pub struct DirectoryWatcher {
    config: WatchConfig,
    cursors: CursorTable,
    cancel: CancellationToken,
}

impl DirectoryWatcher {
    /// Create a watcher for the given configuration.
    pub fn new(config: WatchConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            cursors: CursorTable::new(),
            cancel: CancellationToken::new(),
        })
    }

    /// A handle the signal handler (or anyone else) can use to stop the loop.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Request a stop; the current cycle still completes.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// The current cursor table.
    pub fn cursors(&self) -> &CursorTable {
        &self.cursors
    }

    /// Run poll cycles until the cancellation token fires.
    ///
    /// The interval is "sleep after work": cycle duration adds to the
    /// effective period, and no attempt is made to compensate for drift.
    pub async fn run(&mut self) {
        let started = Instant::now();

        WatchEvent::startup(
            &self.config.path,
            self.config.extension.as_str(),
            self.config.magic_string.as_str(),
            self.config.interval,
        )
        .log();

        while !self.cancel.is_cancelled() {
            match run_cycle(&mut self.cursors, &self.config) {
                Ok(events) => {
                    for event in &events {
                        event.log();
                    }
                }
                Err(err) => WatchEvent::cycle_failed(err.to_string()).log(),
            }

            tokio::select! {
                _ = tokio::time::sleep(self.config.interval) => {}
                _ = self.cancel.cancelled() => {
                    debug!("Cancellation observed during sleep");
                    break;
                }
            }
        }

        WatchEvent::shutdown(started.elapsed()).log();
    }
}
