use serde::{Deserialize, Serialize};

use crate::economy::Economy;

/// A potion: instant restoration plus an optional timed stat buff. A zero
/// `duration_turns` means the potion is purely instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PotionDef {
    pub name: String,
    pub hp_restore: i32,
    pub attack_effect: i32,
    pub defense_effect: i32,
    pub magic_effect: i32,
    pub mana_restore: i32,
    pub max_mana_increase: i32,
    pub magic_defense_effect: i32,
    pub crit_rate_effect: f32,
    pub crit_damage_effect: f32,
    pub duration_turns: i32,
    pub description: String,
    pub price: Economy,
}

/// Food and drink: instant restoration and permanent max-pool bonuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvisionDef {
    pub name: String,
    pub health_restoration: i32,
    pub max_health_bonus: i32,
    pub max_mana_bonus: i32,
    pub mana_restoration: i32,
    pub description: String,
    pub price: Economy,
}

#[allow(clippy::too_many_arguments)]
fn potion(
    name: &str,
    hp_restore: i32,
    attack_effect: i32,
    defense_effect: i32,
    magic_effect: i32,
    mana_restore: i32,
    max_mana_increase: i32,
    crit_rate_effect: f32,
    crit_damage_effect: f32,
    duration_turns: i32,
    silver: i64,
    description: &str,
) -> PotionDef {
    PotionDef {
        name: name.to_string(),
        hp_restore,
        attack_effect,
        defense_effect,
        magic_effect,
        mana_restore,
        max_mana_increase,
        magic_defense_effect: 0,
        crit_rate_effect,
        crit_damage_effect,
        duration_turns,
        description: description.to_string(),
        price: Economy::new(0, 0, silver, 0),
    }
}

pub(super) fn default_potions() -> Vec<PotionDef> {
    vec![
        potion("Small Health Potion", 50, 0, 0, 0, 0, 0, 0.0, 0.0, 0, 12, "Restores 50 HP"),
        potion("Large Health Potion", 150, 0, 0, 0, 0, 0, 0.0, 0.0, 0, 36, "Restores 150 HP"),
        potion("Extra Large Health Potion", 300, 0, 0, 0, 0, 0, 0.0, 0.0, 0, 72, "Restores 300 HP"),
        potion("Small Mana Potion", 0, 0, 0, 0, 15, 5, 0.0, 0.0, 3, 24, "Restores 15 Mana for 3 turns"),
        potion("Large Mana Potion", 0, 0, 0, 0, 40, 10, 0.0, 0.0, 3, 60, "Restores 40 Mana for 3 turns"),
        potion("Extra Large Mana Potion", 0, 0, 0, 0, 80, 20, 0.0, 0.0, 3, 120, "Restores 80 Mana for 3 turns"),
        potion("Strength Potion", 0, 10, 0, 0, 0, 0, 0.0, 0.0, 3, 30, "Increases Attack by 10 for 3 turns"),
        potion("Defense Potion", 0, 0, 5, 0, 0, 0, 0.0, 0.0, 3, 30, "Increases Defense by 5 for 3 turns"),
        potion("Magic Elixir", 0, 0, 0, 15, 20, 10, 0.0, 0.0, 3, 48,
            "Increases Magic Attack by 15 and restores 20 Mana for 3 turns"),
        potion("Rage Potion", 0, 0, 0, 0, 0, 0, 0.1, 0.5, 3, 96,
            "Increases Crit Rate by 10% and Crit Damage by 50% for 3 turns"),
        potion("Wrath Potion", 0, 0, 0, 0, 0, 0, 0.15, 0.75, 3, 108,
            "Increases Crit Rate by 15% and Crit Damage by 75% for 3 turns"),
        potion("Regeneration Potion", 20, 0, 0, 0, 0, 0, 0.0, 0.0, 5, 84,
            "Restores 20 HP per turn for 5 turns"),
    ]
}

fn provision(
    name: &str,
    health_restoration: i32,
    max_health_bonus: i32,
    max_mana_bonus: i32,
    mana_restoration: i32,
    silver: i64,
    copper: i64,
    description: &str,
) -> ProvisionDef {
    ProvisionDef {
        name: name.to_string(),
        health_restoration,
        max_health_bonus,
        max_mana_bonus,
        mana_restoration,
        description: description.to_string(),
        price: Economy::new(0, 0, silver, copper),
    }
}

pub(super) fn default_provisions() -> Vec<ProvisionDef> {
    vec![
        provision("Bread", 20, 0, 0, 0, 1, 0, "A loaf of bread that restores some health."),
        provision("Apple", 25, 0, 0, 0, 1, 50, "A fresh apple that restores health."),
        provision("Cheese", 30, 0, 0, 0, 2, 0, "A piece of cheese that restores health."),
        provision("Meat Stew", 50, 5, 0, 0, 5, 0, "A hearty stew that restores health and boosts max HP."),
        provision("Grilled Fish", 45, 3, 0, 0, 6, 0, "Grilled fish that restores health."),
        provision("Vegetable Soup", 40, 2, 0, 0, 4, 50, "Nutritious soup that restores health."),
        provision("Roasted Meat", 60, 7, 0, 0, 8, 0, "Roasted meat that greatly restores health."),
        provision("Salad", 35, 1, 0, 0, 3, 50, "A fresh salad that restores health."),
        provision("Water", 0, 0, 0, 10, 0, 50, "Clean water that restores mana."),
        provision("Milk", 0, 0, 0, 15, 1, 0, "Fresh milk that restores mana."),
        provision("Wine", 0, 0, 0, 20, 3, 0, "A glass of wine that restores mana."),
        provision("Beer", 0, 0, 0, 18, 2, 50, "A mug of beer that restores mana."),
        provision("Juice", 0, 0, 0, 12, 1, 50, "Fruit juice that restores mana."),
    ]
}
