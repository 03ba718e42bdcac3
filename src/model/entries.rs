use crate::error::{FolioError, Result};
use serde::Serialize;
use std::fmt;

/// A skill level in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    /// Panics when `value` exceeds [`Proficiency::MAX`]. Inside a `const`
    /// initializer that panic is a compile error.
    pub const fn new(value: u8) -> Self {
        assert!(value <= Self::MAX, "proficiency must be within 0..=100");
        Self(value)
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = FolioError;

    fn try_from(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(FolioError::InvalidValue(format!(
                "proficiency {} is outside 0..={}",
                value,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named score, used for proficiency bars, radar axes and project impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub name: &'static str,
    pub proficiency: Proficiency,
}

impl SkillEntry {
    pub const fn new(name: &'static str, proficiency: u8) -> Self {
        Self {
            name,
            proficiency: Proficiency::new(proficiency),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Engagement {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceItem {
    pub task: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationItem {
    pub period: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub grade: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectItem {
    pub title: &'static str,
    pub technology: &'static [&'static str],
    pub overview: &'static str,
    /// Heading for `highlights` ("Key Features", "Key Achievements").
    pub highlights_label: &'static str,
    pub highlights: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub impact: &'static [SkillEntry],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub title: &'static str,
    pub dataset: &'static str,
    pub description: &'static str,
    pub outcome: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AchievementCategory {
    Sports,
    Technology,
    Leadership,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 3] = [
        AchievementCategory::Sports,
        AchievementCategory::Technology,
        AchievementCategory::Leadership,
    ];
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AchievementCategory::Sports => write!(f, "Sports"),
            AchievementCategory::Technology => write!(f, "Technology"),
            AchievementCategory::Leadership => write!(f, "Leadership"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementItem {
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CertificationItem {
    pub title: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub year: u16,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CertificationMilestone {
    pub label: &'static str,
    pub year: u16,
    pub importance: u8,
}

/// Headline figure shown as a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub short_location: &'static str,
}

/// An outbound link that is shown but never followed; activating it only
/// displays `notice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkPlaceholder {
    pub key: char,
    pub label: &'static str,
    pub notice: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_bounds() {
        assert_eq!(Proficiency::new(0).value(), 0);
        assert_eq!(Proficiency::new(100).value(), 100);
        assert!(Proficiency::try_from(100).is_ok());
        assert!(matches!(
            Proficiency::try_from(101),
            Err(FolioError::InvalidValue(_))
        ));
    }

    #[test]
    #[should_panic(expected = "proficiency must be within 0..=100")]
    fn test_proficiency_new_rejects_out_of_range() {
        let value = std::hint::black_box(120);
        let _ = Proficiency::new(value);
    }

    #[test]
    fn test_skill_entry_serializes_plain_number() {
        let json = serde_json::to_value(SkillEntry::new("SQL", 85)).unwrap();
        assert_eq!(json["proficiency"], 85);
    }
}
