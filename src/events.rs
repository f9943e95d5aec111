//! UI Events
//!
//! Everything the host can feed into the portfolio: key presses, pointer
//! gestures on the terminal window, window controls, side navigation and
//! clock ticks. Events are plain serde data so a session can be scripted as
//! JSON lines and replayed.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Section;
use crate::terminal::Key;
use crate::window::{Handle, Point};

/// Window chrome buttons and the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Maximize,
    Close,
    Open,
    /// Floating launcher button
    Toggle,
}

/// One input event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// A key pressed in the input field
    Key(Key),
    /// Type a string into the input field
    Type { text: String },
    /// Type a line and press Enter
    Submit { line: String },
    PointerDown { target: Handle, x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    Click { control: Control },
    /// Side navigation or realm card click
    Navigate { section: Section },
    DismissNotice { id: String },
    ViewportResized { width: f32, height: f32 },
    /// Let timers run
    Tick,
    /// Advance the clock by `ms` before ticking (scripts only)
    Wait { ms: u64 },
}

impl UiEvent {
    pub fn pointer(&self) -> Option<Point> {
        match *self {
            UiEvent::PointerDown { x, y, .. } | UiEvent::PointerMove { x, y } => {
                Some(Point::new(x, y))
            }
            _ => None,
        }
    }
}

/// Parse a JSON-lines event script
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based.
pub fn parse_script(text: &str) -> Result<Vec<UiEvent>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line.trim()).map_err(|e| Error::InvalidEvent {
                line: index + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}
