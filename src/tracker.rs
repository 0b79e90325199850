//! Membership reconciliation between the directory snapshot and the cursor table.

use std::collections::HashSet;

use crate::config::WatchConfig;
use crate::cursor::CursorTable;
use crate::event::WatchEvent;

/// Reconcile the cursor table against a fresh directory snapshot.
///
/// The snapshot is the authoritative view of the directory; the table is a
/// derived cache brought back in line with it every cycle:
///
/// - snapshot files matching the extension filter that are not yet tracked
///   are inserted at cursor zero and reported as added;
/// - tracked files absent from the snapshot are dropped and reported as
///   removed, regardless of extension.
///
/// A file whose name no longer matches the filter is indistinguishable from
/// a removal followed by the appearance of an unrelated file.
pub fn reconcile(
    table: &mut CursorTable,
    snapshot: &HashSet<String>,
    config: &WatchConfig,
) -> Vec<WatchEvent> {
    let mut events = Vec::new();

    for filename in snapshot {
        if config.matches_extension(filename) && !table.contains(filename) {
            table.set(filename.clone(), 0);
            events.push(WatchEvent::file_added(filename.clone(), &config.path));
        }
    }

    let stale: Vec<String> = table
        .tracked()
        .filter(|name| !snapshot.contains(*name))
        .map(str::to_string)
        .collect();

    for filename in stale {
        table.remove(&filename);
        events.push(WatchEvent::file_removed(filename, &config.path));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::WatchEventKind;
    use pretty_assertions::assert_eq;

    fn snapshot(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn config() -> WatchConfig {
        WatchConfig::new("/watched", "MAGIC")
    }

    #[test]
    fn test_new_matching_file_is_tracked() {
        let mut table = CursorTable::new();
        let events = reconcile(&mut table, &snapshot(&["a.txt"]), &config());

        assert!(table.contains("a.txt"));
        assert_eq!(table.get("a.txt"), 0);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0].kind,
            WatchEventKind::FileAdded { filename, .. } if filename == "a.txt"
        ));
    }

    #[test]
    fn test_non_matching_extension_is_ignored() {
        let mut table = CursorTable::new();
        let events = reconcile(&mut table, &snapshot(&["x.log"]), &config());

        assert!(table.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_missing_file_is_untracked() {
        let mut table = CursorTable::new();
        table.set("gone.txt", 5);

        let events = reconcile(&mut table, &snapshot(&[]), &config());

        assert!(!table.contains("gone.txt"));
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0].kind,
            WatchEventKind::FileRemoved { filename, .. } if filename == "gone.txt"
        ));
    }

    #[test]
    fn test_already_tracked_file_is_quiet() {
        let mut table = CursorTable::new();
        table.set("a.txt", 3);

        let events = reconcile(&mut table, &snapshot(&["a.txt"]), &config());

        assert!(events.is_empty());
        assert_eq!(table.get("a.txt"), 3);
    }

    #[test]
    fn test_removal_ignores_extension_filter() {
        // A tracked file is dropped when it vanishes even if the filter
        // would no longer admit it.
        let mut table = CursorTable::new();
        table.set("old.txt", 2);

        let cfg = config().with_extension(".log");
        let events = reconcile(&mut table, &snapshot(&[]), &cfg);

        assert!(table.is_empty());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_readded_file_starts_from_zero() {
        let mut table = CursorTable::new();
        table.set("a.txt", 9);

        reconcile(&mut table, &snapshot(&[]), &config());
        reconcile(&mut table, &snapshot(&["a.txt"]), &config());

        assert_eq!(table.get("a.txt"), 0);
    }
}
