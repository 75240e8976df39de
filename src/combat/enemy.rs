//! Enemy instances: template instantiation, context scaling, selection and
//! victory rewards.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::player::Player;
use crate::character::progression::Progression;
use crate::character::stats::StatBlock;
use crate::content::{ContentError, ContentRegistry, EnemyTemplate, LocationType};
use crate::core::constants::{
    DUNGEON_DODGE_PENALTY, DUNGEON_MAGIC_ARMOR_BONUS, DUNGEON_MAGIC_ATTACK_BONUS,
    ENEMY_LEVEL_SCALE_FLOOR, ENEMY_LEVEL_SCALE_STEP, TOWN_ATTACK_PENALTY, TOWN_DODGE_BONUS,
    VILLAGE_ATTACK_PENALTY, VILLAGE_DODGE_BONUS,
};
use crate::economy::Economy;

/// A live enemy, transient for one combat. The `scaled` flag guarantees the
/// context-fitting transform runs at most once per instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub stats: StatBlock,
    pub reward: Economy,
    pub debuffs: Vec<String>,
    scaled: bool,
}

impl Enemy {
    pub fn from_template(template: &EnemyTemplate) -> Self {
        Self {
            name: template.name.clone(),
            stats: template.stats,
            reward: template.reward,
            debuffs: template.debuffs.clone(),
            scaled: false,
        }
    }

    /// Assembles an enemy directly from parts. Mostly for tests and custom
    /// encounters outside the catalog.
    pub fn from_parts(name: &str, stats: StatBlock, reward: Economy, debuffs: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            stats,
            reward,
            debuffs,
            scaled: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn is_scaled(&self) -> bool {
        self.scaled
    }
}

/// Fits a freshly instantiated enemy to the encounter: level scaling toward
/// the target difficulty, a location stat multiplier, then flat location
/// adjustments. Applied at most once; templates at or above the target
/// difficulty are left untouched.
pub fn scale_for_context(enemy: &mut Enemy, difficulty: i32, location: LocationType) {
    if enemy.scaled || enemy.stats.level >= difficulty {
        return;
    }

    let level_scale = (1.0 + (difficulty - enemy.stats.level) as f32 * ENEMY_LEVEL_SCALE_STEP)
        .max(ENEMY_LEVEL_SCALE_FLOOR);
    enemy.stats.scale(level_scale);
    enemy.stats.scale(location.enemy_stat_multiplier());

    match location {
        LocationType::PeacefulVillage => {
            enemy.stats.dodge_rate += VILLAGE_DODGE_BONUS;
            enemy.stats.attack = (enemy.stats.attack - VILLAGE_ATTACK_PENALTY).max(0);
            enemy.stats.magic_attack = (enemy.stats.magic_attack - VILLAGE_ATTACK_PENALTY).max(0);
        }
        LocationType::PeacefulTown => {
            enemy.stats.dodge_rate += TOWN_DODGE_BONUS;
            enemy.stats.attack = (enemy.stats.attack - TOWN_ATTACK_PENALTY).max(0);
            enemy.stats.magic_attack = (enemy.stats.magic_attack - TOWN_ATTACK_PENALTY).max(0);
        }
        LocationType::Dungeon => {
            enemy.stats.magic_armor += DUNGEON_MAGIC_ARMOR_BONUS;
            enemy.stats.magic_attack += DUNGEON_MAGIC_ATTACK_BONUS;
            enemy.stats.dodge_rate = (enemy.stats.dodge_rate - DUNGEON_DODGE_PENALTY).max(0.0);
        }
        LocationType::Terrain | LocationType::SpellStore => {}
    }

    enemy.stats.level = difficulty;
    enemy.scaled = true;
    debug!(enemy = %enemy.name, difficulty, ?location, "enemy scaled for context");
}

/// Picks a random template whose difficulty fits and which may appear at the
/// location, then scales it. An empty candidate set is a content bug.
pub fn random_enemy(
    registry: &ContentRegistry,
    difficulty: i32,
    location: LocationType,
    rng: &mut impl Rng,
) -> Result<Enemy, ContentError> {
    let candidates: Vec<&EnemyTemplate> = registry
        .enemy_catalog()
        .iter()
        .filter(|t| t.difficulty_level <= difficulty && t.allowed_locations.contains(&location))
        .collect();

    if candidates.is_empty() {
        return Err(ContentError::NoValidCandidates {
            difficulty,
            location,
        });
    }

    let chosen = candidates[rng.gen_range(0..candidates.len())];
    let mut enemy = Enemy::from_template(chosen);
    scale_for_context(&mut enemy, difficulty, location);
    Ok(enemy)
}

/// Instantiates a specific template by name, scaled to the given level and
/// location. Used by forced event encounters.
pub fn enemy_by_name(
    registry: &ContentRegistry,
    name: &str,
    level: i32,
    location: LocationType,
) -> Result<Enemy, ContentError> {
    let template = registry.enemy_template(name)?;
    let mut enemy = Enemy::from_template(template);
    scale_for_context(&mut enemy, level, location);
    Ok(enemy)
}

/// Pays out a defeated enemy: currency into the purse, experience banked,
/// then the level-up loop runs. Returns levels gained.
pub fn grant_rewards(player: &mut Player, progression: &mut Progression, enemy: &Enemy) -> u32 {
    player.economy.add(
        enemy.reward.platinum,
        enemy.reward.gold,
        enemy.reward.silver,
        enemy.reward.copper,
    );
    progression.grant_experience(&mut player.stats, enemy.stats.experience);
    progression.check_level_up(&mut player.stats)
}
