use serde::{Deserialize, Serialize};

/// Per-turn effect a debuff inflicts while active.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DebuffEffect {
    pub health_decrease: i32,
    pub attack_decrease: i32,
    pub defense_decrease: i32,
    pub magic_attack_decrease: i32,
    pub magic_defense_decrease: i32,
    pub duration_turns: i32,
    pub proc_damage: i32,
    pub added_turns_on_trigger: i32,
    pub amplifier_on_trigger: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebuffStacking {
    pub stackable: bool,
    pub max_stacks: i32,
    /// Name of the escalated effect once the stack cap is reached.
    pub capstone_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebuffApplication {
    pub throwable: bool,
    pub enchant_on_weapon: bool,
    pub enchant_name: String,
    pub chance: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebuffDef {
    pub name: String,
    pub effect: DebuffEffect,
    pub stacking: DebuffStacking,
    pub application: DebuffApplication,
    pub description: String,
}

#[allow(clippy::too_many_arguments)]
fn debuff(
    name: &str,
    health_decrease: i32,
    attack_decrease: i32,
    magic_attack_decrease: i32,
    duration_turns: i32,
    proc_damage: i32,
    added_turns_on_trigger: i32,
    amplifier_on_trigger: f32,
    max_stacks: i32,
    capstone_name: &str,
    enchant_name: &str,
    chance: f32,
    description: &str,
) -> DebuffDef {
    DebuffDef {
        name: name.to_string(),
        effect: DebuffEffect {
            health_decrease,
            attack_decrease,
            defense_decrease: 0,
            magic_attack_decrease,
            magic_defense_decrease: 0,
            duration_turns,
            proc_damage,
            added_turns_on_trigger,
            amplifier_on_trigger,
        },
        stacking: DebuffStacking {
            stackable: true,
            max_stacks,
            capstone_name: capstone_name.to_string(),
        },
        application: DebuffApplication {
            throwable: true,
            enchant_on_weapon: true,
            enchant_name: enchant_name.to_string(),
            chance,
        },
        description: description.to_string(),
    }
}

pub(super) fn default_debuffs() -> Vec<DebuffDef> {
    vec![
        debuff("Burning", 10, 0, 0, 3, 5, 0, 1.0, 5, "Scorched", "Fire Aspect", 0.3,
            "Deals 10 damage over 3 turns."),
        debuff("Freeze", 0, 0, 0, 3, 0, 2, 1.2, 6, "Frostbite", "Frost Aspect", 1.0,
            "Freezes the target, slowing them and dealing frost damage over time."),
        debuff("Poison", 5, 0, 0, 3, 0, 2, 1.3, 6, "Envenomed", "Poisoned", 1.0,
            "Poisons the target, dealing damage over time and stacking poison effects."),
        debuff("Bleeding", 5, 0, 0, 0, 0, 0, 2.0, 8, "Hemorrhage", "Vampiric", 1.0,
            "Causes severe bleeding over time, dealing high damage and may heal the attacker."),
        debuff("Weakness", 0, 5, 0, 3, 0, 0, 1.0, 3, "Enfeebled", "Weakening Strike", 1.0,
            "Reduces the target's attack temporarily."),
        debuff("Vulnerability", 0, 0, 0, 3, 0, 0, 1.0, 3, "Exposed", "Crippling Strike", 1.0,
            "Makes the target more vulnerable, increasing damage taken."),
        debuff("Magic Dampening", 0, 0, 5, 3, 0, 0, 1.0, 3, "Arcane Suppressed", "Nullifying Strike", 1.0,
            "Reduces the target's magic damage output."),
        debuff("Mana Weakness", 0, 0, 0, 3, 10, 0, 1.0, 3, "Mana Starved", "Mana Drain", 1.0,
            "Reduces the target's mana and ability to cast spells."),
        debuff("Health Blight", 0, 0, 0, 3, 0, 0, 1.5, 3, "Blighted", "Blight Enchantment", 1.0,
            "Reduces the target's max HP and increases all incoming damage."),
        // Applied only through spells; never stacks or enchants.
        DebuffDef {
            name: "Armor Break".to_string(),
            effect: DebuffEffect {
                defense_decrease: 5,
                duration_turns: 3,
                amplifier_on_trigger: 1.0,
                ..DebuffEffect::default()
            },
            stacking: DebuffStacking::default(),
            application: DebuffApplication::default(),
            description: "Shatters armor, reducing physical defense.".to_string(),
        },
        DebuffDef {
            name: "Shock".to_string(),
            effect: DebuffEffect {
                health_decrease: 4,
                duration_turns: 2,
                amplifier_on_trigger: 1.0,
                ..DebuffEffect::default()
            },
            stacking: DebuffStacking::default(),
            application: DebuffApplication::default(),
            description: "Courses lightning through the target each turn.".to_string(),
        },
    ]
}
