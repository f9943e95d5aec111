//! Command interpreter
//!
//! A submitted line is split into a verb and its arguments, echoed into the
//! transcript with the current prompt, and dispatched through [`COMMANDS`],
//! the single `{verb -> handler}` table. Handlers only ever touch the
//! transcript; everything else they want to happen is returned as a
//! [`TerminalEffect`] for the host to carry out.

mod builtins;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::models::{EntryKind, Section, TranscriptEntry};
use crate::session::AccessGate;
use crate::terminal::history::CommandHistory;
use crate::terminal::transcript::Transcript;

/// Side effects a command asks the host to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEffect {
    /// Switch the site to another section
    Navigate(Section),
    /// Check `code` against the secret of `realm`; the outcome is not reported back
    UnlockAttempt { code: String, realm: String },
    /// Close the terminal window
    CloseTerminal,
}

/// Read-only view of the session a command runs in
#[derive(Debug, Clone, Copy)]
pub struct ShellEnv<'a> {
    /// Section the site currently shows
    pub section: Section,
    /// Which gated realms are open
    pub gate: &'a AccessGate,
}

impl ShellEnv<'_> {
    /// Prompt path, e.g. `~/dev`
    pub fn path(&self) -> String {
        self.section.path()
    }
}

/// One row of the verb table
pub struct CommandSpec {
    /// Verb and its aliases; the first one is canonical
    pub names: &'static [&'static str],
    /// Argument synopsis shown by `help`
    pub args: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
    pub handler: fn(&mut Invocation<'_>),
}

impl CommandSpec {
    /// `"ls, dir"` or `"cd <target>"`, as listed by `help`
    pub fn synopsis(&self) -> String {
        let names = self.names.join(", ");
        if self.args.is_empty() {
            names
        } else {
            format!("{} {}", names, self.args)
        }
    }
}

/// Every recognized verb
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        names: &["ls", "dir"],
        args: "",
        description: "List sections",
        handler: builtins::list,
    },
    CommandSpec {
        names: &["cd"],
        args: "<section>",
        description: "Navigate to a section (.., ~ for home)",
        handler: builtins::change_section,
    },
    CommandSpec {
        names: &["pwd"],
        args: "",
        description: "Show current path",
        handler: builtins::print_path,
    },
    CommandSpec {
        names: &["whoami"],
        args: "",
        description: "Show user info",
        handler: builtins::whoami,
    },
    CommandSpec {
        names: &["unlock"],
        args: "<realm> <code>",
        description: "Unlock a gated realm",
        handler: builtins::unlock,
    },
    CommandSpec {
        names: &["projects"],
        args: "",
        description: "List featured projects",
        handler: builtins::projects,
    },
    CommandSpec {
        names: &["skills"],
        args: "",
        description: "Show technical skills",
        handler: builtins::skills,
    },
    CommandSpec {
        names: &["contact"],
        args: "",
        description: "Show contact details",
        handler: builtins::contact,
    },
    CommandSpec {
        names: &["history"],
        args: "",
        description: "Show recent commands",
        handler: builtins::history,
    },
    CommandSpec {
        names: &["date"],
        args: "",
        description: "Show current date and time",
        handler: builtins::date,
    },
    CommandSpec {
        names: &["echo"],
        args: "<text>",
        description: "Print text",
        handler: builtins::echo,
    },
    CommandSpec {
        names: &["banner"],
        args: "",
        description: "Show the banner",
        handler: builtins::banner,
    },
    CommandSpec {
        names: &["neofetch"],
        args: "",
        description: "Show system summary",
        handler: builtins::neofetch,
    },
    CommandSpec {
        names: &["ping"],
        args: "[host]",
        description: "Ping a host",
        handler: builtins::ping,
    },
    CommandSpec {
        names: &["sudo"],
        args: "<command>",
        description: "Run a command as root",
        handler: builtins::sudo,
    },
    CommandSpec {
        names: &["clear", "cls"],
        args: "",
        description: "Clear terminal",
        handler: builtins::clear,
    },
    CommandSpec {
        names: &["help", "?"],
        args: "",
        description: "Show commands",
        handler: builtins::help,
    },
    CommandSpec {
        names: &["exit", "quit"],
        args: "",
        description: "Close terminal",
        handler: builtins::exit,
    },
];

static INDEX: Lazy<HashMap<&'static str, &'static CommandSpec>> = Lazy::new(|| {
    COMMANDS
        .iter()
        .flat_map(|spec| spec.names.iter().map(move |name| (*name, spec)))
        .collect()
});

static VERBS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    COMMANDS
        .iter()
        .flat_map(|spec| spec.names.iter().copied())
        .collect()
});

/// Find the table row for `verb` (case-sensitive)
pub fn lookup(verb: &str) -> Option<&'static CommandSpec> {
    INDEX.get(verb).copied()
}

/// Every verb name including aliases, in table order
pub fn verbs() -> &'static [&'static str] {
    &VERBS
}

/// State handed to a verb handler
pub struct Invocation<'a> {
    /// Arguments after the verb
    pub args: &'a [&'a str],
    pub env: ShellEnv<'a>,
    pub history: &'a CommandHistory,
    pub config: &'a Config,
    transcript: &'a mut Transcript,
    effects: Vec<TerminalEffect>,
}

impl Invocation<'_> {
    pub fn output(&mut self, content: impl Into<String>) {
        self.transcript.push(TranscriptEntry::output(content));
    }

    pub fn error(&mut self, content: impl Into<String>) {
        self.transcript.push(TranscriptEntry::error(content));
    }

    pub fn system(&mut self, content: impl Into<String>) {
        self.transcript.push(TranscriptEntry::system(content));
    }

    /// Output several lines as one entry
    pub fn output_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let content = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.output(content);
    }

    pub fn emit(&mut self, effect: TerminalEffect) {
        self.effects.push(effect);
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }
}

/// Runs command lines against the verb table
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    config: Config,
}

impl CommandInterpreter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one line
    ///
    /// A blank line does nothing. Otherwise the line is echoed with the
    /// prompt, dispatched, and the effects requested by the verb returned.
    pub fn execute(
        &self,
        line: &str,
        env: ShellEnv<'_>,
        history: &CommandHistory,
        transcript: &mut Transcript,
    ) -> Vec<TerminalEffect> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let mut tokens = trimmed.split_whitespace();
        let command = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        transcript.append(EntryKind::Command, format!("{} $ {}", env.path(), trimmed));

        let Some(spec) = lookup(command) else {
            debug!("Unknown command: {}", command);
            transcript.append(
                EntryKind::Error,
                format!(
                    "Command not found: {}. Type 'help' for available commands.",
                    command
                ),
            );
            return Vec::new();
        };

        debug!("Executing '{}' with {} argument(s)", spec.names[0], args.len());
        let mut invocation = Invocation {
            args: &args,
            env,
            history,
            config: &self.config,
            transcript,
            effects: Vec::new(),
        };
        (spec.handler)(&mut invocation);
        invocation.effects
    }
}
