//! Transcript Entry Model
//!
//! A single line (or block of lines) shown in the terminal transcript.
//! Entries are created by the interpreter and never mutated afterwards.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of a transcript entry, which also decides how it is coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Echo of a submitted command line, prompt included
    Command,
    /// Regular command output
    Output,
    /// Error reported by a command
    Error,
    /// Messages from the terminal itself (welcome banner, logout)
    System,
}

/// Represents one immutable entry of the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Unique identifier for the entry
    id: String,

    /// Entry kind
    kind: EntryKind,

    /// Text content, possibly spanning several lines
    content: String,

    /// When the entry was created (in local time)
    timestamp: DateTime<Local>,
}

impl TranscriptEntry {
    /// Create a new entry
    pub fn new(kind: EntryKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Echo of a submitted command
    pub fn command(content: impl Into<String>) -> Self {
        Self::new(EntryKind::Command, content)
    }

    /// Regular output
    pub fn output(content: impl Into<String>) -> Self {
        Self::new(EntryKind::Output, content)
    }

    /// Error output
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(EntryKind::Error, content)
    }

    /// Terminal system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(EntryKind::System, content)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Lines of the content, for renderers that draw line by line
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    pub fn is_error(&self) -> bool {
        self.kind == EntryKind::Error
    }
}
