use serde::{Deserialize, Serialize};

use crate::character::stats::StatBlock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    pub stats: StatBlock,
    pub lore: String,
}

/// Racial template. `bonus` is additive on top of a class base; its rate
/// fields are always zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceDef {
    pub name: String,
    pub bonus: StatBlock,
    pub lore: String,
}

#[allow(clippy::too_many_arguments)]
fn base_stats(
    hp: i32,
    armor: f32,
    magic_armor: f32,
    attack: i32,
    magic_attack: i32,
    mana: i32,
    crit_rate: f32,
    crit_damage: f32,
    dodge_rate: f32,
    magic_amplifier_rate: f32,
) -> StatBlock {
    StatBlock {
        hitpoints: hp,
        max_hitpoints: hp,
        armor,
        magic_armor,
        attack,
        magic_attack,
        mana,
        max_mana: mana,
        crit_rate,
        crit_damage,
        dodge_rate,
        magic_amplifier_rate,
        level: 1,
        experience: 0.0,
    }
}

fn class(name: &str, stats: StatBlock, lore: &str) -> ClassDef {
    ClassDef {
        name: name.to_string(),
        stats,
        lore: lore.to_string(),
    }
}

pub(super) fn default_classes() -> Vec<ClassDef> {
    vec![
        class("Warrior", base_stats(75, 0.05, 0.02, 8, 2, 10, 0.05, 1.5, 0.05, 1.0),
            "Strong and resilient melee fighter, excels at absorbing damage."),
        class("Knight", base_stats(70, 0.08, 0.03, 10, 2, 8, 0.04, 1.4, 0.05, 1.0),
            "Heavily armored, balanced between defense and offense."),
        class("Berserker", base_stats(80, 0.04, 0.02, 7, 2, 6, 0.03, 1.3, 0.05, 1.0),
            "Frenzied melee attacker with high hitpoints and raw power."),
        class("Assassin", base_stats(55, 0.02, 0.01, 8, 2, 6, 1.0, 100.0, 1.0, 1.0),
            "Agile and deadly, specializes in critical strikes."),
        class("Rogue", base_stats(60, 0.02, 0.01, 7, 2, 8, 0.2, 1.8, 0.1, 1.0),
            "Stealthy fighter with high dexterity and precision."),
        class("Ranger", base_stats(50, 0.01, 0.01, 5, 4, 10, 0.3, 1.7, 0.1, 1.0),
            "Skilled marksman, excels at ranged attacks and high crits."),
        class("Mage", base_stats(45, 0.01, 0.05, 2, 9, 18, 0.05, 1.5, 0.05, 1.2),
            "Master of arcane arts, high magic attack and mana pool."),
        class("Sorcerer", base_stats(40, 0.01, 0.07, 2, 11, 22, 0.05, 1.5, 0.05, 1.3),
            "Specialist in destructive spells, fragile but powerful."),
        class("Scholar", base_stats(50, 0.02, 0.05, 3, 7, 14, 0.05, 1.5, 0.05, 1.1),
            "Versatile magic user, balanced between offense and defense."),
        class("Shrewd Diplomat", base_stats(60, 0.02, 0.03, 5, 4, 14, 0.05, 1.5, 0.05, 1.0),
            "Uses wit and charm to outsmart opponents, prefers diplomacy over fighting."),
        class("Travelling Merchant", base_stats(65, 0.03, 0.02, 3, 2, 10, 0.05, 1.5, 0.05, 1.0),
            "Journeys across lands trading goods, can defend himself when needed."),
        class("Sheltered Noble", base_stats(55, 0.02, 0.05, 3, 2, 10, 0.05, 1.5, 0.05, 1.0),
            "Raised in comfort, trained in etiquette and light combat."),
        class("Prisoner", base_stats(50, 0.01, 0.01, 2, 2, 6, 0.05, 1.2, 0.05, 1.0),
            "Imprisoned for unknown reasons, weak but resilient in spirit."),
    ]
}

fn race(name: &str, hp: i32, armor: f32, magic_armor: f32, attack: i32, magic_attack: i32, mana: i32, lore: &str) -> RaceDef {
    RaceDef {
        name: name.to_string(),
        bonus: StatBlock {
            hitpoints: hp,
            max_hitpoints: hp,
            armor,
            magic_armor,
            attack,
            magic_attack,
            mana,
            max_mana: mana,
            level: 1,
            ..StatBlock::default()
        },
        lore: lore.to_string(),
    }
}

pub(super) fn default_races() -> Vec<RaceDef> {
    vec![
        race("Human", 5, 0.025, 0.025, 1, 1, 2,
            "Humans are versatile and resilient, gaining a slight boost to all stats."),
        race("Noble", 4, 0.025, 0.025, 1, 1, 2,
            "Nobles are trained in etiquette and combat, slightly higher attack and mana."),
        race("Commoner", 6, 0.02, 0.02, 0, 0, 2,
            "Commoners are hardy but less trained in combat, slightly higher hitpoints."),
        race("Elf", 0, 0.0, 0.05, 2, 5, 0,
            "Elves are agile and magically attuned, gaining bonus magic attack and magic armor."),
        race("High Elf", 0, 0.0, 0.06, 3, 6, 0,
            "High Elves are elite magic users, with enhanced magic abilities."),
        race("Wood Elf", 0, 0.0, 0.04, 2, 4, 0,
            "Wood Elves are skilled hunters and scouts, with increased agility and stealth."),
        race("Dark Elf", 2, 0.0, 0.075, 3, 6, 0,
            "Dark Elves are exiled elves who dwell in shadows and forbidden lands, mistrusted by other races."),
        race("Orc", 15, 0.075, 0.0, 5, 0, 0,
            "Orcs are strong, aggressive warriors often hunted or outlawed by human and elf societies."),
        race("Reptilian", 15, 0.075, 0.0, 5, 0, 0,
            "Reptilians are predatory creatures, often hunted by human and elf societies."),
    ]
}
