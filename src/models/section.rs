//! Sections and gated realms
//!
//! A section is anything the site can navigate to: the five realms plus the
//! routed pages. Two realms are gated behind an unlock code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every navigable destination of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Cyber,
    Dev,
    Design,
    Game,
    Projects,
    Blog,
    Contact,
}

impl Section {
    /// All sections in listing order
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::Cyber,
        Section::Dev,
        Section::Design,
        Section::Game,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    /// Name used by `cd` and in paths
    pub fn name(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Cyber => "cyber",
            Section::Dev => "dev",
            Section::Design => "design",
            Section::Game => "game",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    /// Human readable title
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Cyber => "Cyber Realm",
            Section::Dev => "Development Realm",
            Section::Design => "Design Vault",
            Section::Game => "Game Sanctum",
            Section::Projects => "Projects",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::Cyber => "🛡️",
            Section::Dev => "💻",
            Section::Design => "🎨",
            Section::Game => "🎮",
            Section::Projects => "🚀",
            Section::Blog => "📄",
            Section::Contact => "📧",
        }
    }

    /// Logical path shown in the prompt (`~` for home, `~/<name>` otherwise)
    pub fn path(self) -> String {
        match self {
            Section::Home => "~".to_string(),
            other => format!("~/{}", other.name()),
        }
    }

    /// Whether this section is one of the five realms (as opposed to a page)
    pub fn is_realm(self) -> bool {
        matches!(
            self,
            Section::Home | Section::Cyber | Section::Dev | Section::Design | Section::Game
        )
    }

    /// The gate guarding this section, if any
    pub fn gate(self) -> Option<GatedRealm> {
        match self {
            Section::Design => Some(GatedRealm::Design),
            Section::Game => Some(GatedRealm::Game),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    /// Case-sensitive, like the terminal verbs
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Realms that stay locked until unlocked with a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatedRealm {
    Design,
    Game,
}

impl GatedRealm {
    pub const ALL: [GatedRealm; 2] = [GatedRealm::Design, GatedRealm::Game];

    pub fn section(self) -> Section {
        match self {
            GatedRealm::Design => Section::Design,
            GatedRealm::Game => Section::Game,
        }
    }

    pub fn name(self) -> &'static str {
        self.section().name()
    }

    pub fn title(self) -> &'static str {
        self.section().title()
    }

    /// Parse a realm name; always-open realms and pages yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse::<Section>().ok().and_then(Section::gate)
    }
}

impl fmt::Display for GatedRealm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
