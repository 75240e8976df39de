//! The capability surface the attack engine needs from anything that
//! fights. The engine never names a concrete Player/Npc/Enemy type.

use crate::character::party::Npc;
use crate::character::player::Player;
use crate::combat::enemy::Enemy;

pub trait Combatant {
    fn name(&self) -> &str;
    fn physical_attack(&self) -> i32;
    fn magic_attack(&self) -> i32;
    fn armor(&self) -> f32;
    fn magic_armor(&self) -> f32;
    fn crit_rate(&self) -> f32;
    fn crit_damage(&self) -> f32;
    fn dodge_rate(&self) -> f32;

    /// Only the player's equipped weapon can proc debuffs.
    fn is_player(&self) -> bool {
        false
    }

    fn take_damage(&mut self, amount: i32);
    fn debuffs(&self) -> &[String];
    fn apply_debuff(&mut self, debuff: &str);

    /// Debuff set carried by the attacker's weapon. Empty everywhere except
    /// the player.
    fn weapon_debuffs(&self) -> &[String] {
        &[]
    }

    fn weapon_debuff_chance(&self) -> f32 {
        0.0
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn physical_attack(&self) -> i32 {
        self.stats.attack
    }

    fn magic_attack(&self) -> i32 {
        self.stats.magic_attack
    }

    fn armor(&self) -> f32 {
        self.stats.armor
    }

    fn magic_armor(&self) -> f32 {
        self.stats.magic_armor
    }

    fn crit_rate(&self) -> f32 {
        self.stats.crit_rate
    }

    fn crit_damage(&self) -> f32 {
        self.stats.crit_damage
    }

    fn dodge_rate(&self) -> f32 {
        self.stats.dodge_rate
    }

    fn is_player(&self) -> bool {
        true
    }

    fn take_damage(&mut self, amount: i32) {
        self.stats.take_damage(amount);
    }

    fn debuffs(&self) -> &[String] {
        &self.debuffs
    }

    fn apply_debuff(&mut self, debuff: &str) {
        self.debuffs.push(debuff.to_string());
    }

    fn weapon_debuffs(&self) -> &[String] {
        &self.weapon_debuffs
    }

    fn weapon_debuff_chance(&self) -> f32 {
        self.weapon_debuff_chance
    }
}

impl Combatant for Npc {
    fn name(&self) -> &str {
        &self.name
    }

    fn physical_attack(&self) -> i32 {
        self.stats.attack
    }

    fn magic_attack(&self) -> i32 {
        self.stats.magic_attack
    }

    fn armor(&self) -> f32 {
        self.stats.armor
    }

    fn magic_armor(&self) -> f32 {
        self.stats.magic_armor
    }

    fn crit_rate(&self) -> f32 {
        self.stats.crit_rate
    }

    fn crit_damage(&self) -> f32 {
        self.stats.crit_damage
    }

    fn dodge_rate(&self) -> f32 {
        self.stats.dodge_rate
    }

    fn take_damage(&mut self, amount: i32) {
        self.stats.take_damage(amount);
    }

    fn debuffs(&self) -> &[String] {
        &self.debuffs
    }

    fn apply_debuff(&mut self, debuff: &str) {
        self.debuffs.push(debuff.to_string());
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn physical_attack(&self) -> i32 {
        self.stats.attack
    }

    fn magic_attack(&self) -> i32 {
        self.stats.magic_attack
    }

    fn armor(&self) -> f32 {
        self.stats.armor
    }

    fn magic_armor(&self) -> f32 {
        self.stats.magic_armor
    }

    fn crit_rate(&self) -> f32 {
        self.stats.crit_rate
    }

    fn crit_damage(&self) -> f32 {
        self.stats.crit_damage
    }

    fn dodge_rate(&self) -> f32 {
        self.stats.dodge_rate
    }

    fn take_damage(&mut self, amount: i32) {
        self.stats.take_damage(amount);
    }

    fn debuffs(&self) -> &[String] {
        &self.debuffs
    }

    fn apply_debuff(&mut self, debuff: &str) {
        self.debuffs.push(debuff.to_string());
    }
}
