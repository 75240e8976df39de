use serde::{Deserialize, Serialize};

/// Broad category a location belongs to. Drives enemy scaling and which
/// enemy templates may spawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    PeacefulVillage,
    PeacefulTown,
    Dungeon,
    Terrain,
    SpellStore,
}

impl LocationType {
    /// Multiplicative pass applied on top of level scaling when an enemy is
    /// fitted to an encounter here.
    pub fn enemy_stat_multiplier(&self) -> f32 {
        match self {
            LocationType::PeacefulVillage => 0.8,
            LocationType::PeacefulTown => 0.9,
            LocationType::Terrain => 1.0,
            LocationType::Dungeon => 1.2,
            LocationType::SpellStore => 0.9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDef {
    pub name: String,
    pub description: String,
    pub difficulty_level: i32,
    pub kind: LocationType,
}

fn location(name: &str, description: &str, difficulty_level: i32, kind: LocationType) -> LocationDef {
    LocationDef {
        name: name.to_string(),
        description: description.to_string(),
        difficulty_level,
        kind,
    }
}

pub(super) fn default_locations() -> Vec<LocationDef> {
    use LocationType::*;
    vec![
        location("Peaceful Village", "A quiet village where people live in harmony.", 1, PeacefulVillage),
        location("Riverside Hamlet", "A sleepy cluster of cottages along a slow river.", 1, PeacefulVillage),
        location("Market Town", "A bustling town built around a busy market square.", 2, PeacefulTown),
        location("Harbor Town", "Salt air, creaking ships and merchants shouting prices.", 3, PeacefulTown),
        location("Old Forest Road", "A rutted road winding beneath ancient trees.", 2, Terrain),
        location("Windswept Plains", "Open grassland where wolves shadow the caravans.", 3, Terrain),
        location("Bloodstained Battlefield", "A scarred field littered with the remnants of ancient wars.", 4, Terrain),
        location("Frozen Pass", "A high mountain pass choked with snow and worse.", 6, Terrain),
        location("Smoldering Foothills", "Ash drifts over slopes that never quite cool.", 6, Terrain),
        location("Haunted Ruins", "Ancient ruins cursed with spirits and traps.", 3, Dungeon),
        location("Bandit Hideout", "A hidden camp where outlaws plot their next raids.", 3, Dungeon),
        location("Abandoned Castle", "An old castle rumored to be haunted by ghosts.", 4, Dungeon),
        location("Abyssal Dungeon", "A deep dungeon descending into the abyss, filled with demonic horrors.", 4, Dungeon),
        location("Necromancer's Tower", "A towering spire where undead minions are raised.", 5, Dungeon),
        location("Cursed Citadel", "A fortress overrun by demonic forces.", 6, Dungeon),
        location("Dragon's Lair", "A cavernous lair where a mighty dragon guards its hoard.", 7, Dungeon),
        location("Infernal Pit", "A bottomless pit leading to hellish realms.", 8, Dungeon),
        location("Arcanum Emporium", "A cramped shop stacked with humming grimoires.", 3, SpellStore),
    ]
}
