//! Literal portfolio content.
//!
//! Everything here is compile-time data; nothing is loaded or computed at
//! runtime except [`category_distribution`], which tallies the achievement
//! table.

mod data;

pub use data::*;

use crate::model::AchievementCategory;

/// Achievement count per category, in [`AchievementCategory::ALL`] order.
pub fn category_distribution() -> Vec<(AchievementCategory, usize)> {
    AchievementCategory::ALL
        .into_iter()
        .map(|category| {
            let count = ACHIEVEMENTS
                .iter()
                .filter(|a| a.category == category)
                .count();
            (category, count)
        })
        .collect()
}
