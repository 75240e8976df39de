//! Hireable party members.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::stats::StatBlock;
use crate::content::{ContentError, ContentRegistry, EquipmentKind};
use crate::core::constants::{
    NPC_LEVEL_BAND, NPC_LEVEL_SCALE_STEP, NPC_WAGE_BASE, NPC_WAGE_PER_LEVEL,
};

/// A hired companion. Fights alongside the player until reduced to zero
/// hitpoints, at which point the combat session removes it from the party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub stats: StatBlock,
    pub race: String,
    pub class: String,
    pub level: i32,
    pub equipped_weapon: Option<String>,
    pub equipped_armor: Option<String>,
    pub debuffs: Vec<String>,
    pub spells: Vec<String>,
    pub wage_per_week: i64,
}

impl Npc {
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}

/// Keeps recruit names unique while they are in a party. Fallen members
/// release their name for reuse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameLedger {
    locked: HashSet<String>,
}

const FIRST_NAMES: &[&str] = &[
    "Aldric", "Brant", "Cora", "Dunstan", "Elara", "Fenwick", "Gilda", "Hargrove", "Isolde",
    "Jorund", "Kestrel", "Lysa", "Maren", "Nedric", "Odette", "Pell",
];

const LAST_NAMES: &[&str] = &[
    "Ashdown", "Blackbriar", "Coldwell", "Dunmore", "Eastgate", "Fallowfield", "Greystone",
    "Harrow", "Ironwood", "Keld", "Larkspur", "Mosswood",
];

impl NameLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws an unused name and locks it. The pool is far larger than any
    /// party, so a handful of retries always finds a free combination.
    pub fn draw(&mut self, rng: &mut impl Rng) -> String {
        loop {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let name = format!("{} {}", first, last);
            if self.locked.insert(name.clone()) {
                return name;
            }
        }
    }

    /// Frees a name after its bearer leaves the party.
    pub fn release(&mut self, name: &str) {
        self.locked.remove(name);
    }

    pub fn is_locked(&self, name: &str) -> bool {
        self.locked.contains(name)
    }
}

/// Rolls a fresh recruit near the player's level: random race bonus over a
/// random class base, level scaling, one random piece of gear, and up to two
/// spells the recruit is experienced enough to know.
pub fn generate_npc(
    player_level: i32,
    registry: &ContentRegistry,
    names: &mut NameLedger,
    rng: &mut impl Rng,
) -> Result<Npc, ContentError> {
    let min_level = (player_level - NPC_LEVEL_BAND).max(1);
    let max_level = player_level + NPC_LEVEL_BAND;
    let level = rng.gen_range(min_level..=max_level);

    let race = &registry.races()[rng.gen_range(0..registry.races().len())];
    let class = &registry.classes()[rng.gen_range(0..registry.classes().len())];

    let mut stats = class.stats;
    stats.apply_bonus(&race.bonus);
    stats.scale(1.0 + (level - 1) as f32 * NPC_LEVEL_SCALE_STEP);
    stats.level = level;

    let mut equipped_weapon = None;
    let mut equipped_armor = None;
    let gear_index = rng.gen_range(0..registry.equipment_catalog().len());
    let gear = registry.equipment(gear_index)?;
    match gear.kind {
        EquipmentKind::Weapon => {
            stats.attack += gear.attack_increase;
            stats.magic_attack += gear.magic_attack_increase;
            equipped_weapon = Some(gear.name.clone());
        }
        EquipmentKind::Armor | EquipmentKind::Staff => {
            stats.armor += gear.defense_increase as f32;
            stats.magic_armor += gear.magic_defense_increase as f32;
            equipped_armor = Some(gear.name.clone());
        }
    }

    let mut known: Vec<String> = registry
        .spell_catalog()
        .iter()
        .filter(|s| s.required_level <= level)
        .map(|s| s.name.clone())
        .collect();
    known.shuffle(rng);
    known.truncate(2);

    Ok(Npc {
        name: names.draw(rng),
        stats,
        race: race.name.clone(),
        class: class.name.clone(),
        level,
        equipped_weapon,
        equipped_armor,
        debuffs: Vec::new(),
        spells: known,
        wage_per_week: NPC_WAGE_BASE + NPC_WAGE_PER_LEVEL * level as i64,
    })
}
