//! Experience accumulation and the level-up loop.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::stats::StatBlock;
use crate::core::constants::{
    LEVEL_UP_STAT_GROWTH, XP_REQUIREMENT_GROWTH, XP_REQUIREMENT_START,
};

/// Tracks the experience requirement curve for one character. Experience
/// itself lives on the stat block; this type owns the moving requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progression {
    requirement: f32,
}

impl Progression {
    pub fn new() -> Self {
        Self {
            requirement: XP_REQUIREMENT_START,
        }
    }

    /// Experience needed for the next level.
    pub fn requirement(&self) -> f32 {
        self.requirement
    }

    /// Adds experience from a victory, discovery or event.
    pub fn grant_experience(&self, stats: &mut StatBlock, amount: f32) {
        stats.experience += amount;
    }

    /// Consumes banked experience, one level at a time: each level subtracts
    /// the current requirement, applies 10% stat growth and raises the
    /// requirement by 20%. A single large grant can cash in several levels.
    /// Returns how many levels were gained.
    pub fn check_level_up(&mut self, stats: &mut StatBlock) -> u32 {
        let mut gained = 0;
        while stats.experience >= self.requirement {
            stats.experience -= self.requirement;
            stats.level += 1;
            stats.scale(LEVEL_UP_STAT_GROWTH);
            self.requirement *= XP_REQUIREMENT_GROWTH;
            gained += 1;
            debug!(level = stats.level, requirement = self.requirement, "level up");
        }
        gained
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
