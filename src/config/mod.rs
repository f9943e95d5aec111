//! Configuration management for realmterm
//!
//! Every tunable of the terminal lives here: scrollback bound, window
//! defaults, realm secrets, timer durations and the profile content shown by
//! the informational verbs. Sections missing from a config file fall back to
//! their defaults.

pub mod loader;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::GatedRealm;

/// Main configuration structure for realmterm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal configuration
    pub terminal: TerminalConfig,

    /// Floating window configuration
    pub window: WindowConfig,

    /// Unlock secrets of the gated realms
    pub realms: RealmsConfig,

    /// Timer durations
    pub timing: TimingConfig,

    /// Profile content used by whoami/projects/skills/contact/neofetch
    pub profile: Profile,
}

impl Config {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.terminal.validate()?;
        self.window.validate()?;
        self.realms.validate()?;
        self.timing.validate()?;
        Ok(())
    }
}

/// Terminal-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Maximum number of transcript entries kept before the oldest is evicted
    pub scrollback_limit: usize,

    /// Number of entries listed by the `history` verb
    pub history_display_limit: usize,

    /// Title shown in the welcome banner
    pub title: String,

    /// Version shown in the welcome banner
    pub version: String,

    /// User name shown by neofetch and sudo
    pub user: String,

    /// Host name shown by neofetch
    pub host: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            scrollback_limit: 1000,
            history_display_limit: 15,
            title: "Realm Terminal".to_string(),
            version: "1.0.0".to_string(),
            user: "guest".to_string(),
            host: "hgiorgis".to_string(),
        }
    }
}

impl TerminalConfig {
    fn validate(&self) -> Result<()> {
        if self.scrollback_limit == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.scrollback_limit".to_string(),
                reason: "Scrollback limit must be greater than 0".to_string(),
            });
        }

        if self.scrollback_limit > 1_000_000 {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.scrollback_limit".to_string(),
                reason: "Scrollback limit cannot exceed 1,000,000".to_string(),
            });
        }

        if self.history_display_limit == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.history_display_limit".to_string(),
                reason: "History display limit must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Floating window configuration, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub min_width: f32,
    pub min_height: f32,
    /// Size of the restored (non maximized) window
    pub default_width: f32,
    pub default_height: f32,
    /// Gap kept on every side when maximized
    pub maximize_inset: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_width: 400.0,
            min_height: 300.0,
            default_width: 600.0,
            default_height: 400.0,
            maximize_inset: 50.0,
        }
    }
}

impl WindowConfig {
    fn validate(&self) -> Result<()> {
        let positive = [
            ("window.min_width", self.min_width),
            ("window.min_height", self.min_height),
            ("window.default_width", self.default_width),
            ("window.default_height", self.default_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ConfigValidationFailed {
                    field: field.to_string(),
                    reason: "Must be a positive number".to_string(),
                });
            }
        }

        if !self.maximize_inset.is_finite() || self.maximize_inset < 0.0 {
            return Err(Error::ConfigValidationFailed {
                field: "window.maximize_inset".to_string(),
                reason: "Must be zero or positive".to_string(),
            });
        }

        if self.default_width < self.min_width || self.default_height < self.min_height {
            return Err(Error::ConfigValidationFailed {
                field: "window.default_width".to_string(),
                reason: "Default size cannot be smaller than the minimum size".to_string(),
            });
        }

        Ok(())
    }
}

/// Unlock codes of the gated realms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmsConfig {
    pub design: String,
    pub game: String,
}

impl Default for RealmsConfig {
    fn default() -> Self {
        Self {
            design: "DESIGN_2024".to_string(),
            game: "GAME_MASTER".to_string(),
        }
    }
}

impl RealmsConfig {
    /// The code that unlocks `realm`
    pub fn secret(&self, realm: GatedRealm) -> &str {
        match realm {
            GatedRealm::Design => &self.design,
            GatedRealm::Game => &self.game,
        }
    }

    fn validate(&self) -> Result<()> {
        for realm in GatedRealm::ALL {
            if self.secret(realm).trim().is_empty() {
                return Err(Error::ConfigValidationFailed {
                    field: format!("realms.{}", realm),
                    reason: "Every gated realm needs a non-empty secret".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Timer durations in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Length of the realm transition animation
    pub transition_ms: u64,
    /// Lifetime of a locked-realm notice
    pub notice_ms: u64,
    /// Entrance delay between consecutive notices
    pub notice_stagger_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_ms: 1500,
            notice_ms: 5000,
            notice_stagger_ms: 80,
        }
    }
}

impl TimingConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn notice_lifetime(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    pub fn notice_stagger(&self) -> Duration {
        Duration::from_millis(self.notice_stagger_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.notice_ms == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "timing.notice_ms".to_string(),
                reason: "Notices need a non-zero lifetime".to_string(),
            });
        }
        if self.transition_ms > 60_000 {
            return Err(Error::ConfigValidationFailed {
                field: "timing.transition_ms".to_string(),
                reason: "Transition cannot exceed one minute".to_string(),
            });
        }
        Ok(())
    }
}

/// Portfolio owner profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub role: String,
    pub education: String,
    pub location: String,
    pub email: String,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillGroup>,
    pub contacts: Vec<ContactLink>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Hailegiorgis Wagaye".to_string(),
            handle: "HGiorgis".to_string(),
            role: "Security-Driven Web Developer".to_string(),
            education: "Adama Science & Technology University".to_string(),
            location: "Addis Ababa, Ethiopia".to_string(),
            email: "hailegiorgiswagaye@gmail.com".to_string(),
            projects: vec![
                ProjectEntry::new("Sankrypt - Password Manager", "Live"),
                ProjectEntry::new("Aesop Meredaja - Investment Connect Platform", "Production"),
                ProjectEntry::new("Alkore - Productivity Platform", "Active"),
                ProjectEntry::new("KDpolutry Farm - Report Manage system", "Live"),
                ProjectEntry::new("Sankrypt Firefox Extension", "Experimental"),
            ],
            skills: vec![
                SkillGroup::new("Frontend", &["React", "Next.js(learning)", "TypeScript", "Tailwind"]),
                SkillGroup::new("Backend", &["Express.js", "Laravel", "PostgreSQL", "MySQL"]),
                SkillGroup::new("DevOps", &["Docker", "CI/CD", "Render Deploy", "Cpanel Deploy"]),
                SkillGroup::new("Security", &["Cryptography"]),
            ],
            contacts: vec![
                ContactLink::new("Email", "hailegiorgiswagaye@gmail.com"),
                ContactLink::new("GitHub", "https://github.com/HGiorgis"),
                ContactLink::new("Telegram", "https://t.me/hgiorgis"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub status: String,
}

impl ProjectEntry {
    pub fn new(name: &str, status: &str) -> Self {
        Self {
            name: name.to_string(),
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn new(category: &str, items: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
}

impl ContactLink {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Configuration utilities
pub mod utils {
    use super::*;

    /// Get configuration format from file extension
    pub fn get_config_format(path: &Path) -> Option<loader::ConfigFormat> {
        match path.extension()?.to_str()? {
            "toml" => Some(loader::ConfigFormat::Toml),
            "json" => Some(loader::ConfigFormat::Json),
            _ => None,
        }
    }
}
