//! realmterm - the terminal core of a realm-gated portfolio site
//!
//! The site is a set of sections ("realms") with a floating terminal window
//! on top. Typed commands navigate between realms, print profile content and
//! unlock the two gated realms. This crate holds that logic without any
//! rendering: a host feeds it [`UiEvent`]s and draws the resulting state.
//!
//! ## Module Organization
//!
//! - [`commands`] - Verb table, interpreter and the effects commands request
//! - [`terminal`] - Transcript buffer, command history, completion, input editor
//! - [`window`] - Floating window geometry, drag/resize, pointer capture
//! - [`session`] - Current section, realm access gate, transitions, notices
//! - [`app`] - [`Portfolio`], which wires the terminal to the session
//! - [`events`] - Serializable UI events and event scripts
//! - [`config`] - Configuration loading and defaults
//! - [`models`] - Sections, gated realms, transcript entries
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Instant;
//! use realmterm::{init, Portfolio, UiEvent, Viewport};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = init()?;
//! let mut app = Portfolio::new(config, Viewport::default());
//! app.open_terminal();
//! app.handle_event(UiEvent::Submit { line: "help".into() }, Instant::now());
//! # Ok(())
//! # }
//! ```
//!
//! ## Time
//!
//! Nothing in the library reads the clock for timer state. Transitions and
//! notices are driven by the `Instant` passed to
//! [`Portfolio::handle_event`], which keeps everything deterministic and
//! single-threaded.

#![allow(unexpected_cfgs)]

#[macro_use]
extern crate tracing;

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod session;
pub mod terminal;
pub mod window;

// Re-exports for core functionality
pub use app::Portfolio;
pub use commands::{CommandInterpreter, ShellEnv, TerminalEffect};
pub use config::Config;
pub use error::{Error, Result};
pub use events::{Control, UiEvent};
pub use models::{EntryKind, GatedRealm, Section, TranscriptEntry};
pub use session::{AccessGate, RealmView, Session, UnlockOutcome};
pub use terminal::{Key, Terminal, Transcript};
pub use window::{Geometry, Handle, Point, Viewport, WindowController};

// Convenience re-exports
pub use config::loader::{ConfigLoader, LoadOptions};

/// The current version of realmterm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration from the default locations
///
/// Falls back to the built-in defaults when no file is found or the file
/// found cannot be used. A file named by `$REALMTERM_CONFIG` is not optional:
/// failing to load it is an error.
///
/// # Examples
///
/// ```no_run
/// match realmterm::init() {
///     Ok(config) => println!("scrollback: {}", config.terminal.scrollback_limit),
///     Err(e) => eprintln!("Initialization failed: {}", e),
/// }
/// ```
pub fn init() -> Result<Config> {
    info!("Initializing {} v{}", NAME, VERSION);

    let mut loader = ConfigLoader::new();
    let config = match loader.load_with_options(LoadOptions::default()) {
        Ok(config) => config,
        Err(e) if loader.explicit_path().is_some() => return Err(e),
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from an explicit file
///
/// Unlike [`init`], a missing or invalid file is an error.
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    if !config_path.exists() {
        return Err(Error::ConfigLoadFailed {
            path: config_path.to_path_buf(),
            reason: "Configuration file does not exist".to_string(),
        });
    }

    ConfigLoader::load_from_path(config_path).map_err(|e| {
        error!(
            "Failed to load configuration from {}: {}",
            config_path.display(),
            e
        );
        e
    })
}

/// Turn a startup error into a message with hints for the user
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check configuration file syntax\n• Ensure file permissions are correct",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax\n• Ensure file is valid {}",
                format, reason, format
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}\n\nTry:\n• Check configuration value\n• Remove the field to use its default",
                field, reason
            )
        }
        Error::InvalidEvent { line, reason } => {
            format!(
                "Event Script Error: line {}: {}\n\nEach line must be one JSON event, e.g. {{\"type\":\"submit\",\"line\":\"help\"}}",
                line, reason
            )
        }
        Error::InvalidArgument { argument, reason } => {
            format!(
                "Argument Error: '{}': {}\n\nRun with --help for usage",
                argument, reason
            )
        }
        _ => format!("Error: {}", error),
    }
}
