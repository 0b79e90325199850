//! Per-file scan cursors.

use std::collections::HashMap;

/// Maps each tracked filename to the number of lines already searched.
///
/// Cursors only ever move forward while a file stays tracked; removing and
/// re-adding a file starts it over from zero. All access happens from the
/// single watch-loop task, so no interior locking is needed.
#[derive(Debug, Clone, Default)]
pub struct CursorTable {
    cursors: HashMap<String, u64>,
}

impl CursorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines already scanned for `filename`; zero when untracked.
    pub fn get(&self, filename: &str) -> u64 {
        self.cursors.get(filename).copied().unwrap_or(0)
    }

    /// Record the scan position for `filename`, tracking it if new.
    pub fn set(&mut self, filename: impl Into<String>, count: u64) {
        self.cursors.insert(filename.into(), count);
    }

    /// Stop tracking `filename`, discarding its cursor.
    pub fn remove(&mut self, filename: &str) {
        self.cursors.remove(filename);
    }

    /// Whether `filename` is currently tracked.
    pub fn contains(&self, filename: &str) -> bool {
        self.cursors.contains_key(filename)
    }

    /// Iterate over the tracked filenames, in no particular order.
    pub fn tracked(&self) -> impl Iterator<Item = &str> {
        self.cursors.keys().map(String::as_str)
    }

    /// Number of tracked files.
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Whether no files are tracked.
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_untracked_file_has_zero_cursor() {
        let table = CursorTable::new();
        assert_eq!(table.get("a.txt"), 0);
        assert!(!table.contains("a.txt"));
    }

    #[test]
    fn test_set_and_get() {
        let mut table = CursorTable::new();
        table.set("a.txt", 3);

        assert!(table.contains("a.txt"));
        assert_eq!(table.get("a.txt"), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_discards_cursor() {
        let mut table = CursorTable::new();
        table.set("a.txt", 7);
        table.remove("a.txt");

        assert!(!table.contains("a.txt"));
        assert_eq!(table.get("a.txt"), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_tracked_iteration() {
        let mut table = CursorTable::new();
        table.set("a.txt", 1);
        table.set("b.txt", 2);

        let mut names: Vec<&str> = table.tracked().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }
}
