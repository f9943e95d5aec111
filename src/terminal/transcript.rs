//! Transcript Buffer
//!
//! Ordered log of everything the terminal printed. The view follows the tail:
//! every mutation pins the scroll position back to the bottom.

use std::collections::VecDeque;

use crate::models::{EntryKind, TranscriptEntry};

/// Bounded, insertion-ordered transcript
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Entries, oldest first
    entries: VecDeque<TranscriptEntry>,
    /// Maximum number of entries kept
    capacity: usize,
    /// Lines scrolled up from the bottom (0 = bottom)
    scroll_offset: usize,
    /// Bumped on every mutation so renderers can detect changes cheaply
    revision: u64,
}

impl Transcript {
    /// Create a transcript that keeps at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            scroll_offset: 0,
            revision: 0,
        }
    }

    /// Append an entry, evicting the oldest one when full
    pub fn push(&mut self, entry: TranscriptEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        self.touch();
    }

    /// Shorthand for `push(TranscriptEntry::new(kind, content))`
    pub fn append(&mut self, kind: EntryKind, content: impl Into<String>) {
        self.push(TranscriptEntry::new(kind, content));
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.scroll_offset = 0;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &TranscriptEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.back()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Entries appended after the entry with id `last_seen`
    ///
    /// Returns everything when `last_seen` is `None` or no longer present
    /// (cleared or evicted).
    pub fn after(&self, last_seen: Option<&str>) -> impl Iterator<Item = &TranscriptEntry> {
        let skip = last_seen
            .and_then(|id| self.entries.iter().rposition(|entry| entry.id() == id))
            .map_or(0, |index| index + 1);
        self.entries.iter().skip(skip)
    }

    /// Current scroll position (0 = pinned to the bottom)
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_offset == 0
    }

    /// Scroll towards older entries
    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.total_lines().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
    }

    /// Scroll towards the newest entry
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn total_lines(&self) -> usize {
        self.entries.iter().map(|e| e.lines().count().max(1)).sum()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::with_capacity(1000)
    }
}
