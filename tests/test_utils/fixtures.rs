//! Shared test fixtures
//!
//! Included by the test targets with `#[path]`; not every target uses every
//! helper.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use realmterm::commands::{CommandInterpreter, ShellEnv, TerminalEffect};
use realmterm::config::Config;
use realmterm::terminal::{CommandHistory, Transcript};
use realmterm::{AccessGate, Control, EntryKind, Portfolio, Section, UiEvent, Viewport};

/// Interpreter plus the state it reads, without the surrounding app
pub struct Shell {
    pub interpreter: CommandInterpreter,
    pub gate: AccessGate,
    pub history: CommandHistory,
    pub transcript: Transcript,
    pub section: Section,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            interpreter: CommandInterpreter::default(),
            gate: AccessGate::default(),
            history: CommandHistory::new(),
            transcript: Transcript::default(),
            section: Section::Home,
        }
    }

    /// Record `line` in history the way the input field does, then run it
    pub fn run(&mut self, line: &str) -> Vec<TerminalEffect> {
        if !line.trim().is_empty() {
            self.history.push(line.trim());
        }
        let env = ShellEnv {
            section: self.section,
            gate: &self.gate,
        };
        self.interpreter
            .execute(line, env, &self.history, &mut self.transcript)
    }

    pub fn kinds(&self) -> Vec<EntryKind> {
        self.transcript.entries().map(|e| e.kind()).collect()
    }

    pub fn last(&self) -> String {
        self.transcript
            .last()
            .map(|e| e.content().to_string())
            .unwrap_or_default()
    }
}

/// A portfolio with the terminal already open
pub fn open_portfolio() -> (Portfolio, Instant) {
    let mut app = Portfolio::new(Config::default(), Viewport::new(1200.0, 800.0));
    let now = Instant::now();
    app.handle_event(
        UiEvent::Click {
            control: Control::Open,
        },
        now,
    );
    (app, now)
}

pub fn after_ms(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

pub fn contents(transcript: &Transcript) -> Vec<String> {
    transcript
        .entries()
        .map(|e| e.content().to_string())
        .collect()
}
