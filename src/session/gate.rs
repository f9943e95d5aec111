//! Realm access gate
//!
//! Holds the set of unlocked realms. `home`, `cyber`, `dev` and the routed
//! pages are always open; `design` and `game` open once their secret is
//! presented and never lock again.

use std::collections::BTreeSet;

use crate::config::RealmsConfig;
use crate::models::{GatedRealm, Section};

/// Result of presenting a code to the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The realm was locked and is now open
    Unlocked(GatedRealm),
    /// Correct code for a realm that was already open
    AlreadyUnlocked(GatedRealm),
    /// Unknown realm, always-open realm, or wrong code
    Rejected,
}

impl UnlockOutcome {
    pub fn is_success(self) -> bool {
        !matches!(self, UnlockOutcome::Rejected)
    }
}

/// Set of unlocked realms and the secrets that open them
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    secrets: RealmsConfig,
    unlocked: BTreeSet<GatedRealm>,
}

impl AccessGate {
    pub fn new(secrets: RealmsConfig) -> Self {
        Self {
            secrets,
            unlocked: BTreeSet::new(),
        }
    }

    /// Check `code` against the secret of the realm called `realm`
    ///
    /// Names and codes are compared exactly. A rejection leaves the gate
    /// untouched.
    pub fn attempt_unlock(&mut self, code: &str, realm: &str) -> UnlockOutcome {
        let Some(gated) = GatedRealm::from_name(realm) else {
            debug!("Unlock rejected: '{}' is not a gated realm", realm);
            return UnlockOutcome::Rejected;
        };

        if code != self.secrets.secret(gated) {
            info!("Unlock rejected for {} realm", gated);
            return UnlockOutcome::Rejected;
        }

        if self.unlocked.insert(gated) {
            info!("Unlocked {} realm", gated);
            UnlockOutcome::Unlocked(gated)
        } else {
            UnlockOutcome::AlreadyUnlocked(gated)
        }
    }

    pub fn is_unlocked(&self, realm: GatedRealm) -> bool {
        self.unlocked.contains(&realm)
    }

    /// Whether `section` can be shown right now
    pub fn is_accessible(&self, section: Section) -> bool {
        section.gate().map_or(true, |realm| self.is_unlocked(realm))
    }

    /// Unlocked realms in declaration order
    pub fn unlocked(&self) -> impl Iterator<Item = GatedRealm> + '_ {
        self.unlocked.iter().copied()
    }

    /// The hint shown on a locked-realm notice
    pub fn hint(&self, realm: GatedRealm) -> String {
        format!("Try: unlock {} {}", realm.name(), self.secrets.secret(realm))
    }
}
