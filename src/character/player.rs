use serde::{Deserialize, Serialize};

use crate::character::stats::StatBlock;
use crate::content::{ContentError, ContentRegistry, LocationType};
use crate::economy::Economy;

/// The player character. Owns its stat block exclusively; equipment, buffs
/// and debuffs mutate it through the effect resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stats: StatBlock,
    pub economy: Economy,
    pub race: String,
    pub class: String,
    pub debuffs: Vec<String>,
    /// Debuff set carried by the equipped weapon; cleared on unequip.
    pub weapon_debuffs: Vec<String>,
    pub weapon_debuff_chance: f32,
    pub learned_spells: Vec<String>,
    pub staff_spells: Vec<String>,
    pub location_kind: LocationType,
    pub location: String,
    pub slept_today: bool,
}

impl Player {
    /// Creates a character from a class template with the racial bonus
    /// already applied. Unknown names are content bugs and fail loudly.
    pub fn new(
        name: &str,
        race: &str,
        class: &str,
        registry: &ContentRegistry,
    ) -> Result<Self, ContentError> {
        let class_def = registry.class(class)?;
        let race_def = registry.race(race)?;

        let mut stats = class_def.stats;
        stats.apply_bonus(&race_def.bonus);

        Ok(Self {
            name: name.to_string(),
            stats,
            economy: Economy::default(),
            race: race.to_string(),
            class: class.to_string(),
            debuffs: Vec::new(),
            weapon_debuffs: Vec::new(),
            weapon_debuff_chance: 0.0,
            learned_spells: Vec::new(),
            staff_spells: Vec::new(),
            location_kind: LocationType::Terrain,
            location: "Abandoned Cell".to_string(),
            slept_today: false,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn learn_spell(&mut self, name: &str) {
        if !self.learned_spells.iter().any(|s| s == name) {
            self.learned_spells.push(name.to_string());
        }
    }
}
