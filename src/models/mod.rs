//! Core data models for realmterm
//!
//! This module contains the domain entities shared by the terminal and the
//! session: navigable sections, gated realms and transcript entries.

pub mod section;
pub mod transcript_entry;

// Re-exports for convenience
pub use section::{GatedRealm, Section};
pub use transcript_entry::{EntryKind, TranscriptEntry};
