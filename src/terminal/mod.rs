//! Terminal Core
//!
//! The floating terminal window: transcript, input editor, command
//! interpreter and window geometry. Session state it needs (current section,
//! unlocked realms) comes in as a [`ShellEnv`]; what commands want done
//! outside the window goes out as [`TerminalEffect`]s.

pub mod completion;
pub mod history;
pub mod input;
pub mod transcript;

pub use completion::{complete, Completion};
pub use history::{CommandHistory, Recall};
pub use input::{InputEditor, InputResult, Key};
pub use transcript::Transcript;

use crate::commands::{CommandInterpreter, ShellEnv, TerminalEffect};
use crate::config::Config;
use crate::models::EntryKind;
use crate::window::{Viewport, WindowController};

/// The terminal window and everything inside it
#[derive(Debug)]
pub struct Terminal {
    transcript: Transcript,
    input: InputEditor,
    interpreter: CommandInterpreter,
    window: WindowController,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(Config::default(), Viewport::default())
    }
}

impl Terminal {
    pub fn new(config: Config, viewport: Viewport) -> Self {
        Self {
            transcript: Transcript::with_capacity(config.terminal.scrollback_limit),
            input: InputEditor::new(),
            window: WindowController::new(config.window.clone(), viewport),
            interpreter: CommandInterpreter::new(config),
        }
    }

    /// Replace the transcript with the welcome banner
    pub fn show_welcome(&mut self) {
        let terminal = &self.interpreter.config().terminal;
        let lines = [
            format!("Welcome to {} v{}", terminal.title, terminal.version),
            "Type \"help\" to see available commands".to_string(),
            String::new(),
        ];
        self.transcript.clear();
        for line in lines {
            self.transcript.append(EntryKind::System, line);
        }
    }

    /// Feed one key to the input field
    ///
    /// A submitted line is executed right away; its effects are returned.
    pub fn handle_key(&mut self, key: Key, env: ShellEnv<'_>) -> Vec<TerminalEffect> {
        match self.input.process_key(key) {
            InputResult::CommandReady(line) => self.interpreter.execute(
                &line,
                env,
                self.input.history(),
                &mut self.transcript,
            ),
            InputResult::ClearScreen => {
                self.transcript.clear();
                Vec::new()
            }
            InputResult::CompletionSuggestions(candidates) => {
                trace!("Ambiguous completion: {}", candidates.join(", "));
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Type `line` into the input and press Enter
    pub fn submit(&mut self, line: &str, env: ShellEnv<'_>) -> Vec<TerminalEffect> {
        self.input.set_buffer(line);
        self.handle_key(Key::Enter, env)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn input(&self) -> &InputEditor {
        &self.input
    }

    pub fn history(&self) -> &CommandHistory {
        self.input.history()
    }

    pub fn window(&self) -> &WindowController {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut WindowController {
        &mut self.window
    }

    pub fn config(&self) -> &Config {
        self.interpreter.config()
    }

    /// Prompt shown in front of the input, e.g. `~/dev $`
    pub fn prompt(env: ShellEnv<'_>) -> String {
        format!("{} $", env.path())
    }
}
