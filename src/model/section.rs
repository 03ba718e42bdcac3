use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One page of the portfolio. The set is fixed; dispatch over it is an
/// exhaustive `match`, so adding a variant forces every renderer table to
/// be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Achievements,
    Certifications,
    Contact,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Achievements,
        Section::Certifications,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Achievements => "Achievements",
            Section::Certifications => "Certifications",
            Section::Contact => "Contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::About => "👨‍💼",
            Section::Skills => "🛠️",
            Section::Experience => "💼",
            Section::Projects => "🚀",
            Section::Achievements => "🏆",
            Section::Certifications => "📜",
            Section::Contact => "📞",
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Skills => 2,
            Section::Experience => 3,
            Section::Projects => 4,
            Section::Achievements => 5,
            Section::Certifications => 6,
            Section::Contact => 7,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Section {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.id() == wanted || section.label().to_lowercase() == wanted)
            .ok_or_else(|| FolioError::UnknownSection(s.to_string()))
    }
}
