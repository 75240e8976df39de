use serde::{Deserialize, Serialize};

use crate::character::stats::StatBlock;
use crate::content::locations::LocationType;
use crate::economy::Economy;

/// An enemy template row. `stats.experience` is the experience payout and
/// `reward` the currency payout on defeat; `difficulty_level` gates which
/// encounters may pick the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub stats: StatBlock,
    pub reward: Economy,
    pub lore: String,
    pub min_level: i32,
    pub debuffs: Vec<String>,
    pub difficulty_level: i32,
    pub allowed_locations: Vec<LocationType>,
}

#[allow(clippy::too_many_arguments)]
fn template(
    name: &str,
    hp: i32,
    armor: f32,
    magic_armor: f32,
    attack: i32,
    magic_attack: i32,
    crit_rate: f32,
    crit_damage: f32,
    dodge_rate: f32,
    magic_amplifier_rate: f32,
    level: i32,
    experience: f32,
    reward: Economy,
    lore: &str,
    min_level: i32,
    debuffs: &[&str],
    difficulty_level: i32,
    allowed_locations: &[LocationType],
) -> EnemyTemplate {
    EnemyTemplate {
        name: name.to_string(),
        stats: StatBlock {
            hitpoints: hp,
            max_hitpoints: hp,
            armor,
            magic_armor,
            attack,
            magic_attack,
            mana: 0,
            max_mana: 0,
            crit_rate,
            crit_damage,
            dodge_rate,
            magic_amplifier_rate,
            level,
            experience,
        },
        reward,
        lore: lore.to_string(),
        min_level,
        debuffs: debuffs.iter().map(|d| d.to_string()).collect(),
        difficulty_level,
        allowed_locations: allowed_locations.to_vec(),
    }
}

pub(super) fn default_enemies() -> Vec<EnemyTemplate> {
    use LocationType::*;
    vec![
        template("Ooze", 50, 0.02, 0.02, 5, 0, 0.0, 1.5, 0.0, 1.0, 1, 10.0, Economy::new(0, 0, 0, 70),
            "A pulsating ooze, a corrupted mass of slime that dissolves flesh on contact.",
            1, &[], 1, &[Terrain, Dungeon]),
        template("Cutpurse", 45, 0.02, 0.02, 4, 0, 0.0, 1.5, 0.0, 1.0, 1, 8.0, Economy::new(0, 5, 0, 0),
            "A sly cutpurse, lurking in alleys, stealing not just gold but life essence.",
            1, &[], 1, &[PeacefulVillage, PeacefulTown, Terrain]),
        template("Rat Swarm", 40, 0.01, 0.01, 4, 0, 0.0, 1.4, 0.05, 1.0, 1, 6.0, Economy::new(0, 0, 2, 40),
            "A mass of diseased rats scurrying as one, gnawing anything in their path.",
            1, &["Poison"], 1, &[Terrain, Dungeon]),
        template("Broken Skeleton", 55, 0.03, 0.05, 6, 1, 0.0, 1.4, 0.0, 1.0, 1, 14.0, Economy::new(0, 0, 8, 20),
            "A poorly animated skeleton barely held together by dark magic.",
            1, &[], 1, &[Dungeon]),
        template("Wolf", 72, 0.08, 0.04, 10, 0, 0.0, 1.5, 0.0, 1.0, 1, 24.0, Economy::new(0, 0, 10, 30),
            "Wolves are fierce predators that hunt in packs, their eyes glowing with feral hunger.",
            1, &[], 2, &[Terrain]),
        template("Serpent", 60, 0.03, 0.03, 7, 0, 0.0, 1.5, 0.0, 1.0, 1, 12.0, Economy::new(0, 0, 5, 10),
            "A venomous serpent, coiled in shadows, striking with deadly precision.",
            1, &["Poison"], 2, &[Terrain]),
        template("Carrion Bird", 55, 0.02, 0.02, 6, 0, 0.0, 1.5, 0.0, 1.0, 1, 11.0, Economy::new(0, 0, 15, 10),
            "A scavenging carrion bird, feasting on the dead, its talons dripping with decay.",
            1, &[], 2, &[Terrain]),
        template("Wild Boar", 80, 0.07, 0.02, 11, 0, 0.0, 1.4, 0.0, 1.0, 1, 26.0, Economy::new(0, 0, 15, 40),
            "A raging boar that charges without fear, fueled by primal rage.",
            1, &[], 2, &[Terrain]),
        template("Goblin Scout", 58, 0.04, 0.03, 7, 0, 0.05, 1.5, 0.05, 1.0, 1, 18.0, Economy::new(0, 0, 20, 25),
            "A nimble goblin scout, observing prey before calling reinforcements.",
            1, &[], 2, &[PeacefulVillage, Terrain]),
        template("Goblin Marauder", 64, 0.08, 0.04, 8, 0, 0.0, 1.5, 0.0, 1.0, 1, 16.0, Economy::new(0, 0, 30, 50),
            "Goblin marauders are savage raiders, pillaging villages under the cover of darkness.",
            1, &[], 3, &[PeacefulTown, Terrain, Dungeon]),
        template("Highwayman", 65, 0.05, 0.02, 8, 0, 0.0, 1.5, 0.0, 1.0, 1, 15.0, Economy::new(0, 1, 50, 0),
            "A ruthless highwayman, ambushing travelers on cursed roads for their souls.",
            1, &[], 3, &[PeacefulTown, Terrain]),
        template("Ancient Remains", 56, 0.04, 0.08, 6, 2, 0.0, 1.5, 0.0, 1.0, 1, 20.0, Economy::new(0, 0, 5, 30),
            "Ancient remains are cursed bones of forgotten warriors, animated by dark sorcery.",
            1, &[], 3, &[Terrain, Dungeon]),
        template("Wraith", 60, 0.02, 0.10, 4, 12, 0.05, 1.6, 0.1, 1.2, 2, 30.0, Economy::new(0, 0, 20, 50),
            "A spectral entity, a tormented soul bound to the mortal realm.",
            2, &["Freeze"], 4, &[Dungeon, Terrain]),
        template("Ghoul", 85, 0.05, 0.03, 12, 2, 0.03, 1.4, 0.05, 1.0, 2, 35.0, Economy::new(0, 0, 25, 75),
            "A rotting undead creature, driven by insatiable hunger.",
            2, &["Poison"], 4, &[Dungeon, Terrain]),
        template("Specter", 50, 0.01, 0.12, 3, 15, 0.1, 1.8, 0.15, 1.3, 3, 40.0, Economy::new(0, 0, 30, 0),
            "A ghostly apparition, fading in and out of reality.",
            3, &["Magic Dampening"], 5, &[Dungeon, Terrain]),
        template("Vampire", 90, 0.06, 0.08, 8, 8, 0.08, 1.7, 0.1, 1.2, 5, 60.0, Economy::new(0, 1, 50, 0),
            "An immortal blood-drinker, elegant yet deadly.",
            5, &["Bleeding"], 5, &[Dungeon]),
        template("Demon", 100, 0.08, 0.06, 10, 10, 0.05, 1.5, 0.05, 1.1, 4, 50.0, Economy::new(0, 1, 0, 0),
            "A fiendish being from the abyssal depths.",
            4, &["Burning"], 6, &[Dungeon]),
        template("Lich", 70, 0.03, 0.15, 5, 20, 0.05, 1.6, 0.05, 1.4, 6, 75.0, Economy::new(0, 2, 0, 0),
            "A powerful necromancer who cheated death.",
            6, &["Mana Weakness"], 6, &[Dungeon]),
        template("Fire Elemental", 80, 0.05, 0.05, 5, 15, 0.05, 1.5, 0.05, 1.2, 6, 80.0, Economy::new(0, 0, 50, 0),
            "A fiery elemental born from volcanic flames, wielding destructive fire magic.",
            6, &["Burning"], 6, &[Terrain]),
        template("Ice Wraith", 60, 0.02, 0.08, 4, 10, 0.1, 1.6, 0.1, 1.3, 3, 45.0, Economy::new(0, 0, 30, 0),
            "A spectral being of ice, haunting frozen wastes.",
            3, &["Freeze"], 3, &[Terrain]),
        template("Swamp Beast", 90, 0.08, 0.04, 12, 0, 0.03, 1.4, 0.02, 1.0, 4, 55.0, Economy::new(0, 0, 40, 50),
            "A monstrous creature lurking in murky swamps, dripping with venom.",
            4, &["Poison"], 4, &[Terrain]),
        template("Cave Troll", 120, 0.1, 0.02, 14, 0, 0.02, 1.3, 0.01, 1.0, 5, 70.0, Economy::new(0, 0, 60, 0),
            "A hulking troll dwelling in dark caves, smashing intruders with brute force.",
            5, &[], 5, &[Dungeon, Terrain]),
        template("Necrotic Zombie", 75, 0.06, 0.06, 8, 0, 0.0, 1.2, 0.0, 1.0, 3, 40.0, Economy::new(0, 0, 25, 25),
            "A reanimated corpse infused with necrotic energy, spreading decay.",
            3, &["Poison"], 3, &[Dungeon, Terrain]),
        template("Shadow Fiend", 55, 0.01, 0.12, 3, 12, 0.15, 1.8, 0.2, 1.4, 4, 60.0, Economy::new(0, 0, 35, 0),
            "A shadowy demon that drains magic and hides in darkness.",
            4, &["Magic Dampening"], 4, &[Dungeon]),
        template("Volcanic Golem", 150, 0.12, 0.08, 16, 8, 0.01, 1.2, 0.0, 1.1, 7, 100.0, Economy::new(0, 1, 0, 0),
            "A massive golem forged from volcanic rock, radiating intense heat.",
            7, &["Burning"], 7, &[Dungeon, Terrain]),
        template("Frost Giant", 140, 0.1, 0.05, 18, 0, 0.04, 1.4, 0.03, 1.0, 6, 90.0, Economy::new(0, 0, 80, 0),
            "A colossal giant from icy realms, wielding freezing winds.",
            6, &["Freeze"], 6, &[Terrain]),
        template("Plague Bearer", 70, 0.04, 0.04, 6, 4, 0.05, 1.5, 0.05, 1.1, 4, 50.0, Economy::new(0, 0, 45, 0),
            "A plague-ridden harbinger, spreading disease and despair.",
            4, &["Poison"], 4, &[Terrain]),
        template("Dragon Hatchling", 100, 0.08, 0.1, 10, 12, 0.08, 1.7, 0.1, 1.3, 8, 120.0, Economy::new(0, 2, 0, 0),
            "A young dragon, fierce and powerful, guarding its territory.",
            8, &["Burning"], 8, &[Dungeon]),
        template("Swamp Troll", 140, 0.12, 0.04, 16, 2, 0.02, 1.3, 0.01, 1.0, 6, 95.0, Economy::new(0, 0, 70, 0),
            "A hulking troll from the swamps, covered in muck and wielding a massive club.",
            6, &["Poison"], 6, &[Terrain]),
        template("Forest Spirit", 60, 0.02, 0.08, 4, 10, 0.1, 1.6, 0.15, 1.2, 4, 55.0, Economy::new(0, 0, 40, 0),
            "A ethereal spirit of the forest, weaving magic and illusions.",
            4, &["Freeze"], 4, &[Terrain]),
        template("Mountain Giant", 160, 0.15, 0.05, 20, 0, 0.01, 1.2, 0.0, 1.0, 7, 110.0, Economy::new(0, 1, 0, 0),
            "A colossal giant dwelling in the mountains, hurling boulders at intruders.",
            7, &[], 7, &[Terrain]),
        template("Desert Scorpion", 70, 0.04, 0.04, 8, 0, 0.05, 1.5, 0.05, 1.1, 3, 50.0, Economy::new(0, 0, 35, 0),
            "A venomous scorpion adapted to the harsh desert, striking with deadly precision.",
            3, &["Poison"], 3, &[Terrain]),
        template("Cave Bat Swarm", 50, 0.01, 0.01, 6, 0, 0.2, 1.8, 0.2, 1.0, 2, 40.0, Economy::new(0, 0, 25, 0),
            "A swarm of bats from deep caves, overwhelming foes with numbers.",
            2, &[], 2, &[Dungeon]),
        template("Ruins Guardian", 120, 0.1, 0.12, 12, 8, 0.04, 1.4, 0.03, 1.1, 5, 85.0, Economy::new(0, 0, 60, 0),
            "An ancient guardian of forgotten ruins, infused with arcane energy.",
            5, &["Magic Dampening"], 5, &[Dungeon]),
        template("Plains Wolf Pack", 90, 0.06, 0.03, 12, 0, 0.03, 1.4, 0.02, 1.0, 4, 65.0, Economy::new(0, 0, 45, 0),
            "A pack of wolves roaming the plains, hunting in coordinated attacks.",
            4, &[], 4, &[Terrain]),
        template("Volcano Imp", 65, 0.03, 0.06, 5, 8, 0.08, 1.6, 0.1, 1.2, 3, 55.0, Economy::new(0, 0, 40, 0),
            "A mischievous imp from volcanic regions, hurling fireballs.",
            3, &["Burning"], 3, &[Terrain]),
        template("Frozen Yeti", 130, 0.1, 0.08, 15, 5, 0.03, 1.3, 0.02, 1.0, 6, 100.0, Economy::new(0, 0, 75, 0),
            "A massive yeti from frozen tundras, wielding icy winds.",
            6, &["Freeze"], 6, &[Terrain]),
        template("Giant Spider", 110, 0.03, 0.03, 9, 0, 0.0, 1.5, 0.1, 1.0, 3, 55.0, Economy::new(0, 0, 40, 0),
            "A massive spider with venomous fangs, lurking in dark corners.",
            3, &["Poison"], 3, &[Dungeon, Terrain]),
        template("Bandit Leader", 85, 0.06, 0.04, 12, 0, 0.05, 1.6, 0.05, 1.0, 4, 75.0, Economy::new(0, 1, 0, 0),
            "A cunning bandit leader, skilled in combat and tactics.",
            4, &[], 4, &[PeacefulTown, Terrain]),
        template("Dark Knight", 120, 0.1, 0.08, 15, 5, 0.03, 1.4, 0.02, 1.0, 5, 90.0, Economy::new(0, 1, 50, 0),
            "A knight corrupted by dark magic, wielding a cursed blade.",
            5, &["Bleeding"], 5, &[Dungeon]),
        template("Stone Golem", 180, 0.15, 0.1, 18, 0, 0.0, 1.2, 0.0, 1.0, 8, 130.0, Economy::new(0, 2, 0, 0),
            "An ancient golem made of stone, impervious to most attacks.",
            8, &[], 8, &[Dungeon]),
        template("Fire Imp", 70, 0.02, 0.04, 6, 8, 0.08, 1.7, 0.15, 1.2, 4, 65.0, Economy::new(0, 0, 50, 0),
            "A small fiery demon, hurling balls of flame.",
            4, &["Burning"], 4, &[Terrain]),
        template("Necromancer", 80, 0.04, 0.12, 4, 18, 0.05, 1.5, 0.05, 1.4, 7, 110.0, Economy::new(0, 1, 50, 0),
            "A master of death magic, raising undead minions.",
            7, &["Mana Weakness"], 7, &[Dungeon]),
        template("Griffin", 140, 0.08, 0.06, 16, 0, 0.04, 1.5, 0.05, 1.0, 6, 105.0, Economy::new(0, 1, 25, 0),
            "A majestic beast with eagle wings and lion body, fiercely territorial.",
            6, &[], 6, &[Terrain]),
        template("Mermaid", 90, 0.05, 0.08, 8, 10, 0.06, 1.6, 0.1, 1.1, 5, 85.0, Economy::new(0, 0, 75, 0),
            "A seductive sea creature, luring sailors to their doom.",
            5, &["Freeze"], 5, &[Terrain]),
        template("Troll Shaman", 160, 0.12, 0.08, 14, 12, 0.02, 1.3, 0.01, 1.0, 7, 125.0, Economy::new(0, 1, 0, 0),
            "A shaman troll wielding primal magic and brute strength.",
            7, &["Poison"], 7, &[Terrain, Dungeon]),
    ]
}
