//! One poll cycle: snapshot, reconcile, scan.

use std::collections::HashSet;
use std::fs;

use tracing::debug;

use crate::config::WatchConfig;
use crate::cursor::CursorTable;
use crate::error::Result;
use crate::event::WatchEvent;
use crate::scanner::scan_file;
use crate::tracker::reconcile;

/// Execute one poll cycle against the watched directory.
///
/// Lists the directory (regular files only, non-recursive), reconciles the
/// cursor table against the snapshot, then scans every tracked file. If the
/// directory cannot be listed, a directory-unreadable event is returned and
/// the table is left exactly as it was, so a transient outage heals itself
/// on the next successful listing.
///
/// The returned events preserve the order add/remove first, scan results
/// after; scan order across files is unspecified.
pub fn run_cycle(table: &mut CursorTable, config: &WatchConfig) -> Result<Vec<WatchEvent>> {
    let entries = match fs::read_dir(&config.path) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Failed to list {}: {err}", config.path.display());
            return Ok(vec![WatchEvent::directory_unreadable(&config.path)]);
        }
    };

    let mut snapshot = HashSet::new();
    for entry in entries {
        let entry = entry?;
        // A file deleted mid-listing just drops out of the snapshot.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_file() {
            snapshot.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }

    let mut events = reconcile(table, &snapshot, config);

    let tracked: Vec<String> = table.tracked().map(str::to_string).collect();
    for filename in tracked {
        events.extend(scan_file(
            table,
            &config.path,
            &filename,
            &config.magic_string,
        ));
    }

    Ok(events)
}
