use serde::{Deserialize, Serialize};

use crate::economy::Economy;

/// A learnable spell. Spell effects bypass the dodge/crit pipeline entirely:
/// the configured magnitudes apply flat when cast.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellDef {
    pub name: String,
    pub mana_cost: i32,
    pub health_damage: i32,
    pub mana_damage: i32,
    pub health_restore: i32,
    pub mana_restore: i32,
    pub armor_increase: f32,
    pub magic_armor_increase: f32,
    pub armor_reduction: f32,
    pub magic_armor_reduction: f32,
    pub debuffs: Vec<String>,
    pub debuff_modifier_on_hit: f32,
    pub applicable_on_staffs: bool,
    pub staff_bonus_modifier: f32,
    pub required_level: i32,
    pub description: String,
    pub price: Economy,
}

#[allow(clippy::too_many_arguments)]
fn spell(
    name: &str,
    mana_cost: i32,
    health_damage: i32,
    health_restore: i32,
    armor_increase: f32,
    magic_armor_increase: f32,
    armor_reduction: f32,
    magic_armor_reduction: f32,
    debuffs: &[&str],
    applicable_on_staffs: bool,
    staff_bonus_modifier: f32,
    required_level: i32,
    description: &str,
) -> SpellDef {
    SpellDef {
        name: name.to_string(),
        mana_cost,
        health_damage,
        mana_damage: 0,
        health_restore,
        mana_restore: 0,
        armor_increase,
        magic_armor_increase,
        armor_reduction,
        magic_armor_reduction,
        debuffs: debuffs.iter().map(|d| d.to_string()).collect(),
        debuff_modifier_on_hit: if debuffs.is_empty() { 0.0 } else { 1.0 },
        applicable_on_staffs,
        staff_bonus_modifier,
        required_level,
        description: description.to_string(),
        price: Economy::new(0, 0, 50, 0),
    }
}

pub(super) fn default_spells() -> Vec<SpellDef> {
    vec![
        spell("Glintstone Pebble", 10, 22, 0, 0.0, 0.0, 0.0, 0.0, &[], true, 1.15, 1,
            "Fires a shard of glintstone magic at the enemy."),
        spell("Rock Sling", 14, 28, 0, 0.0, 0.0, 5.0, 0.0, &["Armor Break"], false, 1.0, 2,
            "Hurls boulders that stagger and weaken armor."),
        spell("Flame Sling", 12, 20, 0, 0.0, 0.0, 0.0, 0.0, &["Burning"], false, 1.0, 1,
            "Launches fire that scorches enemies over time."),
        spell("Lightning Spear", 18, 32, 0, 0.0, 0.0, 0.0, 5.0, &["Shock"], false, 1.0, 3,
            "Conjures a spear of lightning that pierces foes."),
        spell("Urgent Heal", 14, 0, 40, 0.0, 0.0, 0.0, 0.0, &[], false, 1.0, 1,
            "Quickly restores health in moments of danger."),
        spell("Flame, Grant Me Strength", 22, 0, 0, 8.0, 4.0, 0.0, 0.0, &[], false, 1.0, 4,
            "Bolsters the body with flame, increasing defenses."),
        spell("Comet Azur", 30, 45, 0, 0.0, 0.0, 0.0, 8.0, &["Freeze"], true, 1.25, 6,
            "Unleashes a devastating torrent of magic."),
        spell("Stars of Ruin", 38, 50, 0, 0.0, 0.0, 0.0, 0.0, &["Burning"], true, 1.2, 7,
            "Summons homing stars that relentlessly pursue foes."),
        spell("Fireball", 20, 38, 0, 0.0, 0.0, 0.0, 0.0, &["Burning"], false, 1.0, 2,
            "Hurls a blazing fireball that explodes on impact."),
        spell("Greater Heal", 28, 0, 85, 0.0, 0.0, 0.0, 0.0, &[], false, 1.0, 5,
            "A powerful incantation that restores great vitality."),
        spell("Frost Nova", 24, 18, 0, 0.0, 0.0, 0.0, 0.0, &["Freeze"], false, 1.0, 4,
            "Releases a wave of frost that freezes nearby enemies."),
    ]
}
