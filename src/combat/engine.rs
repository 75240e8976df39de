//! The single damage-resolution primitive: one attacker, one target, one
//! swing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::combatant::Combatant;
use crate::core::constants::DAMAGE_VARIANCE;

/// Everything one resolved swing produced, for logs and the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attacker: String,
    pub target: String,
    pub physical_damage: i32,
    pub magical_damage: i32,
    pub total_damage: i32,
    pub crit: bool,
    pub dodged: bool,
    pub debuff_inflicted: Option<String>,
}

/// Resolves one attack:
/// 1. dodge roll; a success evades everything;
/// 2. physical and magical damage are computed independently, each reduced
///    multiplicatively by the matching armor and perturbed by +/-15% noise;
/// 3. a crit roll multiplies the summed damage;
/// 4. damage lands (hitpoints may go negative; the session decides what
///    that means);
/// 5. a player attacker may proc one debuff from the equipped weapon's set.
pub fn attack<A, T, R>(attacker: &A, target: &mut T, rng: &mut R) -> AttackOutcome
where
    A: Combatant + ?Sized,
    T: Combatant + ?Sized,
    R: Rng + ?Sized,
{
    if rng.gen_range(0.0..1.0f32) < target.dodge_rate() {
        debug!(attacker = attacker.name(), target = target.name(), "attack dodged");
        return AttackOutcome {
            attacker: attacker.name().to_string(),
            target: target.name().to_string(),
            physical_damage: 0,
            magical_damage: 0,
            total_damage: 0,
            crit: false,
            dodged: true,
            debuff_inflicted: None,
        };
    }

    let physical_damage = roll_damage(attacker.physical_attack(), target.armor(), rng);
    let magical_damage = roll_damage(attacker.magic_attack(), target.magic_armor(), rng);
    let mut total_damage = physical_damage + magical_damage;

    let mut crit = false;
    if rng.gen_range(0.0..1.0f32) < attacker.crit_rate() {
        crit = true;
        total_damage = (total_damage as f32 * attacker.crit_damage()).round() as i32;
    }

    target.take_damage(total_damage);

    let mut debuff_inflicted = None;
    if attacker.is_player() {
        let weapon_debuffs = attacker.weapon_debuffs();
        let chance = attacker.weapon_debuff_chance();
        if !weapon_debuffs.is_empty() && rng.gen_range(0.0..1.0f32) < chance {
            let chosen = &weapon_debuffs[rng.gen_range(0..weapon_debuffs.len())];
            target.apply_debuff(chosen);
            debuff_inflicted = Some(chosen.clone());
        }
    }

    debug!(
        attacker = attacker.name(),
        target = target.name(),
        total_damage,
        crit,
        "attack resolved"
    );

    AttackOutcome {
        attacker: attacker.name().to_string(),
        target: target.name().to_string(),
        physical_damage,
        magical_damage,
        total_damage,
        crit,
        dodged: false,
        debuff_inflicted,
    }
}

/// One damage channel: `attack * (1 - defense)` with uniform noise in
/// `[-0.15·base, +0.15·base]`, floored at zero, rounded to nearest.
fn roll_damage<R: Rng + ?Sized>(attack: i32, defense: f32, rng: &mut R) -> i32 {
    let base = attack as f32 * (1.0 - defense);
    let spread = base.abs() * DAMAGE_VARIANCE;
    let noise = if spread > 0.0 {
        rng.gen_range(-spread..spread)
    } else {
        0.0
    };
    (base + noise).max(0.0).round() as i32
}
