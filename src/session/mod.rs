//! Session state of the site
//!
//! Everything outside the terminal window that commands can influence lives
//! here: the current section, the access gate, pending realm transitions,
//! locked-realm notices and whether the terminal is open. Timer-driven state
//! never reads the clock itself; callers pass `now` and drive expiry through
//! [`Session::tick`].

pub mod gate;

pub use gate::{AccessGate, UnlockOutcome};

use std::time::Instant;

use uuid::Uuid;

use crate::config::{RealmsConfig, TimingConfig};
use crate::models::{GatedRealm, Section};

/// What the content area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealmView {
    /// A transition is running
    Hidden,
    /// The section is shown
    Content(Section),
    /// A gated realm is current but still locked
    Locked(GatedRealm),
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A transition towards the section was started
    Started(Section),
    /// The realm is locked; a notice was raised and the terminal opened
    Locked(GatedRealm),
    /// Already showing that section
    Unchanged,
}

/// Transient notification raised by navigating to a locked realm
#[derive(Debug, Clone)]
pub struct LockedNotice {
    id: String,
    realm: GatedRealm,
    message: String,
    hint: String,
    created_at: Instant,
}

impl LockedNotice {
    fn new(realm: GatedRealm, hint: String, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            realm,
            message: format!("🔒 {} is locked", realm.title()),
            hint,
            created_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn realm(&self) -> GatedRealm {
        self.realm
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    target: Section,
    due: Instant,
}

/// What changed during a [`Session::tick`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Sections arrived at, in completion order
    pub arrived: Vec<Section>,
    /// Number of notices that expired
    pub expired_notices: usize,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.arrived.is_empty() && self.expired_notices == 0
    }
}

/// Site state driven by navigation, unlock attempts and time
#[derive(Debug, Clone)]
pub struct Session {
    current: Section,
    gate: AccessGate,
    timing: TimingConfig,
    terminal_open: bool,
    transitions: Vec<Transition>,
    notices: Vec<LockedNotice>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RealmsConfig::default(), TimingConfig::default())
    }
}

impl Session {
    pub fn new(realms: RealmsConfig, timing: TimingConfig) -> Self {
        Self {
            current: Section::Home,
            gate: AccessGate::new(realms),
            timing,
            terminal_open: false,
            transitions: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Ask to show `section`
    ///
    /// A locked realm raises a notice and opens the terminal instead.
    /// Requests for the current section are ignored.
    pub fn request_navigation(&mut self, section: Section, now: Instant) -> NavigationOutcome {
        if let Some(realm) = section.gate().filter(|realm| !self.gate.is_unlocked(*realm)) {
            debug!("Navigation to locked {} realm refused", realm);
            let notice = LockedNotice::new(realm, self.gate.hint(realm), now);
            self.notices.push(notice);
            self.terminal_open = true;
            return NavigationOutcome::Locked(realm);
        }

        if section == self.current {
            return NavigationOutcome::Unchanged;
        }

        self.start_transition(section, now);
        NavigationOutcome::Started(section)
    }

    /// Present `code` for the realm called `realm`
    ///
    /// On a matching code the realm's notices go away and a transition into
    /// it starts, even when it was already open.
    pub fn attempt_unlock(&mut self, code: &str, realm: &str, now: Instant) -> UnlockOutcome {
        let outcome = self.gate.attempt_unlock(code, realm);
        if let UnlockOutcome::Unlocked(gated) | UnlockOutcome::AlreadyUnlocked(gated) = outcome {
            self.notices.retain(|notice| notice.realm != gated);
            self.start_transition(gated.section(), now);
        }
        outcome
    }

    fn start_transition(&mut self, target: Section, now: Instant) {
        debug!("Transition to {} started", target);
        self.transitions.push(Transition {
            target,
            due: now + self.timing.transition(),
        });
    }

    /// Complete due transitions and expire old notices
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::default();

        let (due, pending): (Vec<_>, Vec<_>) = self
            .transitions
            .drain(..)
            .partition(|transition| transition.due <= now);
        self.transitions = pending;
        for transition in due {
            self.current = transition.target;
            report.arrived.push(transition.target);
        }

        let lifetime = self.timing.notice_lifetime();
        let before = self.notices.len();
        self.notices
            .retain(|notice| now.saturating_duration_since(notice.created_at) < lifetime);
        report.expired_notices = before - self.notices.len();

        if !report.arrived.is_empty() {
            info!("Arrived at {}", self.current);
        }
        report
    }

    pub fn view(&self) -> RealmView {
        if !self.transitions.is_empty() {
            return RealmView::Hidden;
        }
        match self.current.gate() {
            Some(realm) if !self.gate.is_unlocked(realm) => RealmView::Locked(realm),
            _ => RealmView::Content(self.current),
        }
    }

    pub fn current_section(&self) -> Section {
        self.current
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn is_transitioning(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Every live notice, oldest first
    pub fn notices(&self) -> &[LockedNotice] {
        &self.notices
    }

    /// Notices whose staggered entrance has started
    ///
    /// Notice `i` in the list shows up `stagger * i` after it was raised.
    pub fn visible_notices(&self, now: Instant) -> impl Iterator<Item = &LockedNotice> {
        let stagger = self.timing.notice_stagger();
        self.notices.iter().enumerate().filter_map(move |(i, notice)| {
            let delay = stagger * u32::try_from(i).unwrap_or(u32::MAX);
            (now.saturating_duration_since(notice.created_at) >= delay).then_some(notice)
        })
    }

    /// Dismiss one notice early; returns whether it existed
    pub fn dismiss_notice(&mut self, id: &str) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        before != self.notices.len()
    }

    pub fn is_terminal_open(&self) -> bool {
        self.terminal_open
    }

    pub fn open_terminal(&mut self) {
        self.terminal_open = true;
    }

    pub fn close_terminal(&mut self) {
        self.terminal_open = false;
    }

    pub fn toggle_terminal(&mut self) {
        self.terminal_open = !self.terminal_open;
    }
}
