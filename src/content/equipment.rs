use serde::{Deserialize, Serialize};

use crate::economy::Economy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentKind {
    Armor,
    Weapon,
    Staff,
}

/// One catalog row. The flat deltas are what equipping applies; weapons may
/// additionally carry a debuff set with a per-hit proc chance. Crit columns
/// are carried as catalog data for display and future balance work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentDef {
    pub name: String,
    pub kind: EquipmentKind,
    pub defense_increase: i32,
    pub magic_defense_increase: i32,
    pub attack_increase: i32,
    pub magic_attack_increase: i32,
    pub crit_rate_increase: f32,
    pub crit_damage_increase: f32,
    pub debuffs: Vec<String>,
    pub debuff_chance: f32,
    pub description: String,
    pub price: Economy,
}

fn armor(name: &str, defense: i32, magic_defense: i32, silver: i64, description: &str) -> EquipmentDef {
    EquipmentDef {
        name: name.to_string(),
        kind: EquipmentKind::Armor,
        defense_increase: defense,
        magic_defense_increase: magic_defense,
        attack_increase: 0,
        magic_attack_increase: 0,
        crit_rate_increase: 0.0,
        crit_damage_increase: 0.0,
        debuffs: Vec::new(),
        debuff_chance: 0.0,
        description: description.to_string(),
        price: Economy::new(0, 0, silver, 0),
    }
}

#[allow(clippy::too_many_arguments)]
fn weapon(
    name: &str,
    attack: i32,
    crit_rate: f32,
    crit_damage: f32,
    debuffs: &[&str],
    debuff_chance: f32,
    gold: i64,
    silver: i64,
    description: &str,
) -> EquipmentDef {
    EquipmentDef {
        name: name.to_string(),
        kind: EquipmentKind::Weapon,
        defense_increase: 0,
        magic_defense_increase: 0,
        attack_increase: attack,
        magic_attack_increase: 0,
        crit_rate_increase: crit_rate,
        crit_damage_increase: crit_damage,
        debuffs: debuffs.iter().map(|d| d.to_string()).collect(),
        debuff_chance,
        description: description.to_string(),
        price: Economy::new(0, gold, silver, 0),
    }
}

fn staff(name: &str, magic_defense: i32, magic_attack: i32, gold: i64, silver: i64, description: &str) -> EquipmentDef {
    EquipmentDef {
        name: name.to_string(),
        kind: EquipmentKind::Staff,
        defense_increase: 0,
        magic_defense_increase: magic_defense,
        attack_increase: 0,
        magic_attack_increase: magic_attack,
        crit_rate_increase: 0.0,
        crit_damage_increase: 0.0,
        debuffs: Vec::new(),
        debuff_chance: 0.0,
        description: description.to_string(),
        price: Economy::new(0, gold, silver, 0),
    }
}

pub(super) fn default_equipment() -> Vec<EquipmentDef> {
    vec![
        armor("Leather Armor", 5, 0, 24, "Increases Defense by 5"),
        armor("Reinforced Leather Armor", 7, 0, 36, "Increases Defense by 7"),
        armor("Iron Armor", 10, 0, 60, "Increases Defense by 10"),
        armor("Chainmail", 12, 0, 72, "Increases Defense by 12"),
        armor("Steel Armor", 15, 0, 108, "Increases Defense by 15"),
        weapon("Wooden Sword", 8, 0.0, 0.0, &[], 0.0, 0, 36, "Increases Attack by 8"),
        weapon("Iron Sword", 15, 0.0, 0.0, &[], 0.0, 0, 90, "Increases Attack by 15"),
        weapon("Steel Sword", 22, 0.0, 0.0, &["Burning"], 0.3, 0, 132,
            "Increases Attack by 22, 30% chance to apply Burning debuff."),
        weapon("Dagger", 5, 0.1, 1.8, &[], 0.0, 0, 72,
            "Increases Attack by 5, Crit Rate by 10%, Crit Damage by 80%"),
        weapon("Enchanted Dagger", 8, 0.15, 2.0, &[], 0.0, 0, 126,
            "Increases Attack by 8, Crit Rate by 15%, Crit Damage by 100%"),
        weapon("Greatsword", 20, 0.0, 0.0, &[], 0.0, 1, 20, "Increases Attack by 20, heavy two-handed sword."),
        weapon("Mace", 12, 0.0, 0.0, &["Weakness"], 0.2, 0, 72,
            "Increases Attack by 12, 20% chance to apply Weakness debuff."),
        weapon("Battle Axe", 16, 0.0, 0.0, &["Bleeding"], 0.25, 0, 96,
            "Increases Attack by 16, 25% chance to apply Bleeding debuff."),
        weapon("Longsword", 18, 0.05, 0.0, &[], 0.0, 0, 108, "Increases Attack by 18, slight Crit Rate bonus."),
        weapon("Rapier", 12, 0.15, 2.0, &[], 0.0, 0, 84, "Increases Attack by 12, high Crit Rate and Damage."),
        weapon("War Hammer", 20, 0.0, 0.0, &["Weakness"], 0.3, 0, 120,
            "Increases Attack by 20, 30% chance to apply Weakness debuff."),
        weapon("Halberd", 24, 0.0, 0.0, &[], 0.0, 1, 0, "Increases Attack by 24, powerful polearm."),
        weapon("Crossbow", 14, 0.1, 1.5, &[], 0.0, 0, 90, "Increases Attack by 14, ranged weapon with Crit bonuses."),
        weapon("Morning Star", 17, 0.0, 0.0, &["Bleeding"], 0.35, 0, 102,
            "Increases Attack by 17, 35% chance to apply Bleeding debuff."),
        weapon("Katana", 19, 0.08, 1.8, &[], 0.0, 0, 114, "Increases Attack by 19, balanced Crit stats."),
        weapon("Flail", 15, 0.0, 0.0, &["Weakness"], 0.4, 0, 90,
            "Increases Attack by 15, 40% chance to apply Weakness debuff."),
        weapon("Spear", 13, 0.0, 0.0, &[], 0.0, 0, 78, "Increases Attack by 13, versatile polearm."),
        weapon("Bow", 11, 0.12, 1.6, &[], 0.0, 0, 66, "Increases Attack by 11, ranged with good Crit stats."),
        weapon("Scimitar", 14, 0.06, 1.4, &[], 0.0, 0, 84, "Increases Attack by 14, curved blade with Crit bonuses."),
        weapon("Claymore", 22, 0.0, 0.0, &[], 0.0, 1, 20, "Increases Attack by 22, heavy two-handed sword."),
        weapon("Falchion", 16, 0.04, 1.2, &[], 0.0, 0, 96, "Increases Attack by 16, slashing weapon with Crit."),
        weapon("Pike", 18, 0.0, 0.0, &[], 0.0, 0, 108, "Increases Attack by 18, long reach polearm."),
        weapon("Throwing Knives", 8, 0.2, 2.5, &["Bleeding"], 0.15, 0, 48,
            "Increases Attack by 8, high Crit, 15% chance Bleeding."),
        weapon("Quarterstaff", 10, 0.0, 0.0, &[], 0.0, 0, 60, "Increases Attack by 10, simple but effective."),
        staff("Wooden Staff", 0, 8, 0, 36, "Increases Magic Attack by 8"),
        staff("Iron Staff", 0, 15, 0, 90, "Increases Magic Attack by 15"),
        staff("Magic Staff", 22, 22, 1, 32, "Increases Magic Attack by 22"),
    ]
}
