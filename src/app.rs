//! Portfolio application
//!
//! Ties the terminal window to the site session. Events come in through
//! [`Portfolio::handle_event`]; the effects commands request are carried out
//! against the session right away.

use std::time::Instant;

use crate::commands::{ShellEnv, TerminalEffect};
use crate::config::Config;
use crate::events::{Control, UiEvent};
use crate::session::{NavigationOutcome, RealmView, Session, TickReport};
use crate::terminal::{Key, Terminal};
use crate::window::{PointerCapture, Point, Viewport};

/// The whole site: terminal window plus session state
#[derive(Debug)]
pub struct Portfolio {
    terminal: Terminal,
    session: Session,
    capture: Option<PointerCapture>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(Config::default(), Viewport::default())
    }
}

impl Portfolio {
    pub fn new(config: Config, viewport: Viewport) -> Self {
        let session = Session::new(config.realms.clone(), config.timing.clone());
        Self {
            terminal: Terminal::new(config, viewport),
            session,
            capture: None,
        }
    }

    /// Process one event at time `now`
    pub fn handle_event(&mut self, event: UiEvent, now: Instant) -> TickReport {
        trace!("Handling {:?}", event);
        match event {
            UiEvent::Key(key) => {
                if self.session.is_terminal_open() {
                    let env = shell_env(&self.session);
                    let effects = self.terminal.handle_key(key, env);
                    self.apply_effects(effects, now);
                }
            }
            UiEvent::Type { text } => {
                if self.session.is_terminal_open() {
                    for ch in text.chars() {
                        let env = shell_env(&self.session);
                        self.terminal.handle_key(Key::Char(ch), env);
                    }
                }
            }
            UiEvent::Submit { line } => {
                self.submit(&line, now);
            }
            UiEvent::PointerDown { target, x, y } => {
                if self.session.is_terminal_open() {
                    let pointer = Point::new(x, y);
                    if let Some(capture) = self.terminal.window_mut().pointer_down(target, pointer) {
                        self.capture = Some(capture);
                    }
                }
            }
            UiEvent::PointerMove { x, y } => {
                self.terminal.window_mut().pointer_move(Point::new(x, y));
            }
            UiEvent::PointerUp => {
                self.terminal.window_mut().pointer_up();
                self.capture = None;
            }
            UiEvent::Click { control } => self.click(control),
            UiEvent::Navigate { section } => {
                let was_open = self.session.is_terminal_open();
                if let NavigationOutcome::Locked(realm) = self.session.request_navigation(section, now) {
                    debug!("{} is locked, terminal opened", realm.title());
                }
                self.welcome_if_opened(was_open);
            }
            UiEvent::DismissNotice { id } => {
                self.session.dismiss_notice(&id);
            }
            UiEvent::ViewportResized { width, height } => {
                self.terminal
                    .window_mut()
                    .set_viewport(Viewport::new(width, height));
            }
            UiEvent::Tick | UiEvent::Wait { .. } => return self.session.tick(now),
        }
        TickReport::default()
    }

    /// Submit a full command line, as typing it and pressing Enter would
    ///
    /// Ignored while the terminal is closed.
    pub fn submit(&mut self, line: &str, now: Instant) {
        if !self.session.is_terminal_open() {
            return;
        }
        let env = shell_env(&self.session);
        let effects = self.terminal.submit(line, env);
        self.apply_effects(effects, now);
    }

    fn apply_effects(&mut self, effects: Vec<TerminalEffect>, now: Instant) {
        for effect in effects {
            match effect {
                TerminalEffect::Navigate(section) => {
                    self.session.request_navigation(section, now);
                }
                TerminalEffect::UnlockAttempt { code, realm } => {
                    // No transcript feedback either way
                    self.session.attempt_unlock(&code, &realm, now);
                }
                TerminalEffect::CloseTerminal => self.close_terminal(),
            }
        }
    }

    fn click(&mut self, control: Control) {
        match control {
            Control::Maximize => self.terminal.window_mut().toggle_maximize(),
            Control::Close => self.close_terminal(),
            Control::Open => self.open_terminal(),
            Control::Toggle => {
                if self.session.is_terminal_open() {
                    self.close_terminal();
                } else {
                    self.open_terminal();
                }
            }
        }
    }

    pub fn open_terminal(&mut self) {
        let was_open = self.session.is_terminal_open();
        self.session.open_terminal();
        self.welcome_if_opened(was_open);
    }

    pub fn close_terminal(&mut self) {
        self.session.close_terminal();
        self.terminal.window_mut().pointer_up();
        self.capture = None;
    }

    fn welcome_if_opened(&mut self, was_open: bool) {
        if !was_open && self.session.is_terminal_open() {
            info!("Terminal opened");
            self.terminal.show_welcome();
        }
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether a drag or resize is in progress
    pub fn is_pointer_captured(&self) -> bool {
        self.capture.as_ref().is_some_and(PointerCapture::is_active)
    }

    pub fn view(&self) -> RealmView {
        self.session.view()
    }

    /// Prompt for the current section, e.g. `~/dev $`
    pub fn prompt(&self) -> String {
        Terminal::prompt(shell_env(&self.session))
    }
}

fn shell_env(session: &Session) -> ShellEnv<'_> {
    ShellEnv {
        section: session.current_section(),
        gate: session.gate(),
    }
}
