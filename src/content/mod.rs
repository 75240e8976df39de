//! The read-only content registry.
//!
//! All catalog tables (classes, races, equipment, potions, provisions,
//! spells, debuffs, enemy templates, events, locations) live behind one
//! `ContentRegistry` built exactly once, from the embedded defaults or from
//! a JSON content pack, and handed around by shared reference. Nothing
//! mutates it after load.
//!
//! Failed lookups are content-integrity bugs, not runtime conditions a
//! player can cause, so they surface as `ContentError` values the caller is
//! expected to treat as fatal.

pub mod classes;
pub mod debuffs;
pub mod enemies;
pub mod equipment;
pub mod events;
pub mod locations;
pub mod potions;
pub mod spells;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use classes::{ClassDef, RaceDef};
pub use debuffs::{DebuffApplication, DebuffDef, DebuffEffect, DebuffStacking};
pub use enemies::EnemyTemplate;
pub use equipment::{EquipmentDef, EquipmentKind};
pub use events::EventDef;
pub use locations::{LocationDef, LocationType};
pub use potions::{PotionDef, ProvisionDef};
pub use spells::SpellDef;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A named template does not exist in the catalog. Indicates a bug in
    /// content data or a stale reference, never a player mistake.
    #[error("unknown {kind} reference: {name}")]
    UnknownReference { kind: &'static str, name: String },

    /// Enemy selection found no template matching the constraints.
    #[error("no enemy candidates for difficulty {difficulty} in {location:?}")]
    NoValidCandidates {
        difficulty: i32,
        location: LocationType,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRegistry {
    classes: Vec<ClassDef>,
    races: Vec<RaceDef>,
    equipment: Vec<EquipmentDef>,
    potions: Vec<PotionDef>,
    provisions: Vec<ProvisionDef>,
    spells: Vec<SpellDef>,
    debuffs: Vec<DebuffDef>,
    enemies: Vec<EnemyTemplate>,
    events: Vec<EventDef>,
    locations: Vec<LocationDef>,
}

impl ContentRegistry {
    /// The embedded default catalog.
    pub fn embedded() -> Self {
        Self {
            classes: classes::default_classes(),
            races: classes::default_races(),
            equipment: equipment::default_equipment(),
            potions: potions::default_potions(),
            provisions: potions::default_provisions(),
            spells: spells::default_spells(),
            debuffs: debuffs::default_debuffs(),
            enemies: enemies::default_enemies(),
            events: events::default_events(),
            locations: locations::default_locations(),
        }
    }

    /// Loads a content pack from JSON. The shape mirrors the serialized
    /// embedded catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn class(&self, name: &str) -> Result<&ClassDef, ContentError> {
        self.classes
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "class",
                name: name.to_string(),
            })
    }

    pub fn race(&self, name: &str) -> Result<&RaceDef, ContentError> {
        self.races
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "race",
                name: name.to_string(),
            })
    }

    pub fn equipment(&self, index: usize) -> Result<&EquipmentDef, ContentError> {
        self.equipment
            .get(index)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "equipment",
                name: index.to_string(),
            })
    }

    pub fn equipment_by_name(&self, name: &str) -> Result<(usize, &EquipmentDef), ContentError> {
        self.equipment
            .iter()
            .enumerate()
            .find(|(_, e)| e.name == name)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "equipment",
                name: name.to_string(),
            })
    }

    pub fn potion(&self, index: usize) -> Result<&PotionDef, ContentError> {
        self.potions
            .get(index)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "potion",
                name: index.to_string(),
            })
    }

    pub fn potion_by_name(&self, name: &str) -> Result<(usize, &PotionDef), ContentError> {
        self.potions
            .iter()
            .enumerate()
            .find(|(_, p)| p.name == name)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "potion",
                name: name.to_string(),
            })
    }

    pub fn provision(&self, index: usize) -> Result<&ProvisionDef, ContentError> {
        self.provisions
            .get(index)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "provision",
                name: index.to_string(),
            })
    }

    pub fn spell(&self, name: &str) -> Result<&SpellDef, ContentError> {
        self.spells
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "spell",
                name: name.to_string(),
            })
    }

    pub fn debuff(&self, name: &str) -> Result<&DebuffDef, ContentError> {
        self.debuffs
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "debuff",
                name: name.to_string(),
            })
    }

    pub fn enemy_template(&self, name: &str) -> Result<&EnemyTemplate, ContentError> {
        self.enemies
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ContentError::UnknownReference {
                kind: "enemy",
                name: name.to_string(),
            })
    }

    pub fn classes(&self) -> &[ClassDef] {
        &self.classes
    }

    pub fn races(&self) -> &[RaceDef] {
        &self.races
    }

    pub fn equipment_catalog(&self) -> &[EquipmentDef] {
        &self.equipment
    }

    pub fn potion_catalog(&self) -> &[PotionDef] {
        &self.potions
    }

    pub fn provision_catalog(&self) -> &[ProvisionDef] {
        &self.provisions
    }

    pub fn spell_catalog(&self) -> &[SpellDef] {
        &self.spells
    }

    pub fn debuff_catalog(&self) -> &[DebuffDef] {
        &self.debuffs
    }

    pub fn enemy_catalog(&self) -> &[EnemyTemplate] {
        &self.enemies
    }

    pub fn event_catalog(&self) -> &[EventDef] {
        &self.events
    }

    pub fn location_catalog(&self) -> &[LocationDef] {
        &self.locations
    }

    /// Checks every cross-table reference. A well-formed pack returns `Ok`;
    /// anything else is a data bug to fix before shipping the pack.
    pub fn validate(&self) -> Result<(), ContentError> {
        for eq in &self.equipment {
            for debuff in &eq.debuffs {
                self.debuff(debuff)?;
            }
        }
        for spell in &self.spells {
            for debuff in &spell.debuffs {
                self.debuff(debuff)?;
            }
        }
        for enemy in &self.enemies {
            for debuff in &enemy.debuffs {
                self.debuff(debuff)?;
            }
        }
        for event in &self.events {
            if let Some(enemy) = &event.enemy {
                self.enemy_template(enemy)?;
            }
        }
        Ok(())
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::embedded()
    }
}
