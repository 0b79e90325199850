//! Incremental magic-string scanning of a single file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::cursor::CursorTable;
use crate::event::WatchEvent;

/// Scan one tracked file for the magic string, resuming past its cursor.
///
/// Lines are numbered 1-based over the whole file. Every line whose number
/// exceeds the cursor is new: the magic string anywhere within it is
/// reported with the line number. The cursor then advances to the total
/// number of lines read, so the next cycle resumes exactly where this one
/// stopped.
///
/// If the file cannot be opened, a file-unreadable event is emitted and the
/// cursor is left untouched; the entry itself is only dropped by the next
/// cycle's membership reconciliation. A read error mid-file is reported the
/// same way, and the cursor advances only over the lines actually read.
///
/// The file handle lives for this call only.
pub fn scan_file(
    table: &mut CursorTable,
    dir: &Path,
    filename: &str,
    magic_string: &str,
) -> Vec<WatchEvent> {
    let cursor = table.get(filename);
    let file_path = dir.join(filename);

    let file = match File::open(&file_path) {
        Ok(file) => file,
        Err(err) => {
            debug!("Failed to open {}: {err}", file_path.display());
            return vec![WatchEvent::file_unreadable(filename)];
        }
    };

    let mut events = Vec::new();
    let mut lines_read: u64 = 0;

    for line in BufReader::new(file).lines() {
        let text = match line {
            Ok(text) => text,
            Err(err) => {
                debug!("Read error in {}: {err}", file_path.display());
                events.push(WatchEvent::file_unreadable(filename));
                break;
            }
        };

        lines_read += 1;
        if lines_read > cursor && text.contains(magic_string) {
            events.push(WatchEvent::magic_found(magic_string, lines_read, filename));
        }
    }

    // Cursors never move backwards; a truncated file keeps its old position.
    if lines_read > cursor {
        debug!("Advanced cursor for {filename}: {cursor} -> {lines_read}");
        table.set(filename, lines_read);
    }

    events
}
