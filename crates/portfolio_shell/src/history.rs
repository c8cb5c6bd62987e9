//! Submitted-line history with an up/down recall cursor.

/// Ordered submitted lines plus a recall cursor in `0..=len`.
///
/// A cursor equal to `len` means "past the end": nothing is being recalled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    /// Appends a line and moves the cursor past the end.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Steps the cursor back and returns the entry it now points at.
    ///
    /// Returns `None` without moving when already at the first entry.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps the cursor forward and returns the entry it now points at.
    ///
    /// From the last entry (or beyond) the cursor parks past the end and `None` is returned.
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            return self.entries.get(self.cursor).map(String::as_str);
        }
        self.cursor = self.entries.len();
        None
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing was submitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
