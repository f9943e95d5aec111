//! Command Input Processing
//!
//! Line editor for the terminal's single input field. Keys edit the buffer,
//! walk the command history or complete the verb; Enter hands the line over
//! for execution.

use serde::{Deserialize, Serialize};

use super::completion::{complete, Completion};
use super::history::{CommandHistory, Recall};
use crate::commands;

/// Keys the input field reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "key", content = "char")]
pub enum Key {
    Enter,
    Up,
    Down,
    Tab,
    Backspace,
    /// Ctrl+L
    ClearScreen,
    Char(char),
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// A non-blank line was submitted and recorded in history
    CommandReady(String),
    /// Enter on a blank line
    EmptyCommand,
    /// The buffer changed
    TextChanged,
    /// Tab matched several verbs; the buffer is left alone
    CompletionSuggestions(Vec<&'static str>),
    /// Ctrl+L: the host should clear the transcript
    ClearScreen,
    NoOp,
}

/// Input buffer plus command history
#[derive(Debug, Clone, Default)]
pub struct InputEditor {
    buffer: String,
    history: CommandHistory,
}

impl InputEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_key(&mut self, key: Key) -> InputResult {
        match key {
            Key::Enter => self.process_enter(),
            Key::Up => self.apply_recall(|history| history.step_back()),
            Key::Down => self.apply_recall(|history| history.step_forward()),
            Key::Tab => self.process_tab(),
            Key::Backspace => self.process_backspace(),
            Key::ClearScreen => InputResult::ClearScreen,
            Key::Char(ch) if ch.is_control() => InputResult::NoOp,
            Key::Char(ch) => {
                self.buffer.push(ch);
                InputResult::TextChanged
            }
        }
    }

    /// Type a whole string, one character at a time
    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.process_key(Key::Char(ch));
        }
    }

    /// Enter always empties the field; only non-blank lines reach history
    fn process_enter(&mut self) -> InputResult {
        let line = std::mem::take(&mut self.buffer);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return InputResult::EmptyCommand;
        }
        self.history.push(trimmed);
        InputResult::CommandReady(trimmed.to_string())
    }

    fn apply_recall(&mut self, step: impl FnOnce(&mut CommandHistory) -> Recall) -> InputResult {
        match step(&mut self.history) {
            Recall::Show(line) => {
                self.buffer = line;
                InputResult::TextChanged
            }
            Recall::Clear => {
                self.buffer.clear();
                InputResult::TextChanged
            }
            Recall::Unchanged => InputResult::NoOp,
        }
    }

    fn process_tab(&mut self) -> InputResult {
        match complete(&self.buffer, commands::verbs()) {
            Completion::Unique(replacement) => {
                self.buffer = replacement;
                InputResult::TextChanged
            }
            Completion::Ambiguous(candidates) => InputResult::CompletionSuggestions(candidates),
            Completion::NoMatch => InputResult::NoOp,
        }
    }

    fn process_backspace(&mut self) -> InputResult {
        match self.buffer.pop() {
            Some(_) => InputResult::TextChanged,
            None => InputResult::NoOp,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}
