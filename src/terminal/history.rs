//! Command history and up/down recall
//!
//! The log is append-only for the lifetime of a session; nothing is
//! persisted. The cursor counts back from the newest entry.

/// Submitted command lines plus a browsing cursor
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    /// Submitted lines, oldest first
    entries: Vec<String>,
    /// Offset back from the newest entry; `None` when not browsing
    cursor: Option<usize>,
}

/// What the input field should show after a navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// Replace the input with this text
    Show(String),
    /// Stepped past the newest entry: empty the input
    Clear,
    /// Nothing to do
    Unchanged,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and stop browsing
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    /// Step towards older entries (arrow-up)
    pub fn step_back(&mut self) -> Recall {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }

        let oldest = self.entries.len() - 1;
        let cursor = match self.cursor {
            None => 0,
            Some(pos) if pos < oldest => pos + 1,
            // Clamped at the oldest entry, which stays on screen
            Some(pos) => pos,
        };

        self.cursor = Some(cursor);
        Recall::Show(self.entry_at(cursor).to_string())
    }

    /// Step towards newer entries (arrow-down)
    pub fn step_forward(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Unchanged,
            Some(0) => {
                self.cursor = None;
                Recall::Clear
            }
            Some(pos) => {
                let cursor = pos - 1;
                self.cursor = Some(cursor);
                Recall::Show(self.entry_at(cursor).to_string())
            }
        }
    }

    /// Stop browsing without touching the log
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    fn entry_at(&self, cursor: usize) -> &str {
        &self.entries[self.entries.len() - 1 - cursor]
    }

    /// Browsing cursor, `None` when not browsing
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The newest `limit` entries with their 1-based absolute index
    pub fn tail(&self, limit: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(limit);
        self.entries[start..]
            .iter()
            .enumerate()
            .map(move |(i, entry)| (start + i + 1, entry.as_str()))
    }
}
