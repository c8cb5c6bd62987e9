//! Append-only session log.

use terminal_contract::{EntryId, EntryKind, LogEntry};

/// Rendered session entries. Ids keep increasing across clears so UI keys stay unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl SessionLog {
    /// Appends one entry and returns its id.
    pub fn push(&mut self, kind: EntryKind, markup: impl Into<String>) -> EntryId {
        self.next_id = self.next_id.saturating_add(1);
        let id = EntryId(self.next_id);
        self.entries.push(LogEntry {
            id,
            kind,
            markup: markup.into(),
        });
        id
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_stay_unique_across_clear() {
        let mut log = SessionLog::default();
        let first = log.push(EntryKind::Output, "one");
        log.clear();
        let second = log.push(EntryKind::Output, "two");
        assert!(second > first);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].markup, "two");
    }
}
