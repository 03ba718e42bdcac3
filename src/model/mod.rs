//! Data models for the portfolio.
//!
//! - [`Section`]: the eight pages and their sidebar order
//! - [`ChartSpec`]: declarative chart descriptions
//! - content entries ([`SkillEntry`], [`ProjectItem`], [`AchievementItem`], ...)

mod chart;
mod entries;
mod section;

pub use chart::{Axis, ChartKind, ChartSpec, ColorScale, Orientation, Palette, Series};
pub use entries::{
    AchievementCategory, AchievementItem, CertificationItem, CertificationMilestone,
    ContactDetails, EducationItem, Engagement, ExperienceItem, Highlight, LinkPlaceholder,
    Proficiency, ProjectItem, ProjectSummary, SkillEntry, TimelineEvent,
};
pub use section::Section;
