//! Achievement system module.
//!
//! A static catalog plus the per-run set of unlocked entries held by the player.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use types::{AchievementCategory, AchievementDef, AchievementId, Achievements, Milestone};
