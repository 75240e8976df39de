use serde::{Deserialize, Serialize};

/// A travel event row. Deltas may be negative; `enemy` names a template for
/// a forced encounter the caller is expected to run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDef {
    pub name: String,
    pub description: String,
    pub silver_delta: i32,
    pub experience_delta: i32,
    pub health_delta: i32,
    pub mana_delta: i32,
    pub enemy: Option<String>,
    pub enemy_count: u32,
}

fn event(
    name: &str,
    description: &str,
    silver_delta: i32,
    experience_delta: i32,
    health_delta: i32,
    mana_delta: i32,
    enemy: Option<&str>,
    enemy_count: u32,
) -> EventDef {
    EventDef {
        name: name.to_string(),
        description: description.to_string(),
        silver_delta,
        experience_delta,
        health_delta,
        mana_delta,
        enemy: enemy.map(|e| e.to_string()),
        enemy_count,
    }
}

pub(super) fn default_events() -> Vec<EventDef> {
    vec![
        event("Find Treasure", "You stumble upon a hidden treasure chest.", 100, 50, 0, 0, None, 1),
        event("Ambushed by Bandits", "You are ambushed by a group of bandits!", -50, -20, -10, 0, Some("Cutpurse"), 3),
        event("Mysterious Fountain", "You find a mysterious fountain that restores your health and mana.", 0, 0, 30, 20, None, 1),
        event("Ambushed by Goblins", "You are ambushed by a group of goblins!", 0, 0, 0, 0, Some("Goblin Marauder"), 2),
        event("Cursed Artifact", "You discover a cursed artifact that grants power but drains your life force.", 0, 100, -20, 0, None, 1),
        event("Ghostly Encounter", "A restless spirit appears, sharing tales of the past and granting wisdom.", 0, 75, 0, 0, None, 1),
        event("Dark Ritual Site", "You find a site of dark rituals. Participating grants forbidden knowledge but at a cost.", 0, 50, 0, -15, None, 1),
        event("Undead Ambush", "Skeletal warriors rise from the earth, their bones clattering in the night.", 0, 0, 0, 0, Some("Ancient Remains"), 2),
        event("Mysterious Traveler", "A hooded figure offers a cryptic warning and a small reward for your caution.", 25, 25, 0, 0, None, 1),
        event("Ancient Ruin", "Exploring an ancient ruin reveals forgotten lore, but triggers a trap.", 0, 40, -10, 0, None, 1),
        event("Plague Village", "A village afflicted by a mysterious plague; you catch a glimpse of the horror.", 0, 0, -25, 0, None, 1),
        event("Dark Blessing", "A shadowy entity blesses you with dark power, enhancing your abilities at a hidden cost.", 0, 60, -5, 10, None, 1),
        event("Merchant Caravan", "You encounter a merchant caravan willing to trade.", 50, 0, 0, 0, None, 1),
        event("Healing Spring", "You find a natural spring that heals your wounds.", 0, 0, 50, 0, None, 1),
        event("Mana Crystal", "A glowing crystal restores your magical energy.", 0, 0, 0, 50, None, 1),
        event("Bandit Camp", "You stumble upon a bandit camp!", 0, 0, 0, 0, Some("Highwayman"), 2),
        event("Lost Adventurer", "A lost adventurer shares their story and rewards you.", 30, 30, 0, 0, None, 1),
        event("Cursed Forest", "The forest's curse saps your strength.", 0, 0, -15, -10, None, 1),
        event("Treasure Map", "You find an old map leading to hidden treasure.", 75, 25, 0, 0, None, 1),
        event("Wandering Spirit", "A spirit guides you, granting insight.", 0, 50, 0, 0, None, 1),
        event("Ruined Temple", "Exploring a temple drains your mana but reveals secrets.", 0, 30, 0, -20, None, 1),
        event("Dragon Sighting", "A dragon appears, ready for battle!", 0, 0, 0, 0, Some("Dragon Hatchling"), 1),
        event("Ancient Ruins Trap", "You trigger a trap in ancient ruins.", 0, 0, -20, 0, None, 1),
        event("Friendly Merchant", "A merchant offers you a discount.", 50, 25, 0, 0, None, 1),
        event("Healing Herbs", "You find healing herbs.", 0, 0, 40, 0, None, 1),
        event("Mana Crystal Vein", "You discover a vein of mana crystals.", 0, 0, 0, 60, None, 1),
        event("Bandit Ambush", "Bandits ambush you!", 0, 0, 0, 0, Some("Highwayman"), 3),
        event("Lost Artifact", "You find a lost artifact granting power.", 0, 80, 0, 0, None, 1),
        event("Poisonous Mist", "A poisonous mist surrounds you.", 0, 0, -30, -20, None, 1),
        event("Wandering Healer", "A healer offers to restore your health.", 0, 0, 100, 0, None, 1),
        event("Shadow Creature", "A shadow creature attacks!", 0, 0, 0, 0, Some("Shadow Fiend"), 1),
    ]
}
