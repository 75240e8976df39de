use serde::{Deserialize, Serialize};

/// The additive numeric stat record shared by the player, party members and
/// enemies. Armor values are fractional damage-reduction coefficients;
/// `crit_rate`/`dodge_rate` are roll thresholds in [0,1) by convention, but
/// the block itself does not clamp them; callers guard.
///
/// Hitpoints may go negative transiently while a combat round resolves; the
/// combat session treats anything <= 0 as defeat.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub hitpoints: i32,
    pub max_hitpoints: i32,
    pub armor: f32,
    pub magic_armor: f32,
    pub attack: i32,
    pub magic_attack: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub crit_rate: f32,
    pub crit_damage: f32,
    pub dodge_rate: f32,
    pub magic_amplifier_rate: f32,
    pub level: i32,
    pub experience: f32,
}

impl StatBlock {
    /// Proportionally rescales every numeric field. Integer fields round to
    /// nearest; current hitpoints/mana are re-clamped to the new maxima.
    pub fn scale(&mut self, multiplier: f32) {
        self.max_hitpoints = (self.max_hitpoints as f32 * multiplier).round() as i32;
        self.max_mana = (self.max_mana as f32 * multiplier).round() as i32;
        self.hitpoints = (self.hitpoints as f32 * multiplier).round() as i32;
        self.hitpoints = self.hitpoints.min(self.max_hitpoints);
        self.mana = (self.mana as f32 * multiplier).round() as i32;
        self.mana = self.mana.min(self.max_mana);
        self.armor *= multiplier;
        self.magic_armor *= multiplier;
        self.attack = (self.attack as f32 * multiplier).round() as i32;
        self.magic_attack = (self.magic_attack as f32 * multiplier).round() as i32;
        self.dodge_rate *= multiplier;
        self.crit_rate *= multiplier;
        self.crit_damage *= multiplier;
        self.magic_amplifier_rate *= multiplier;
    }

    /// Adds a racial bonus on top of a class base. Only the core pools and
    /// attack/armor values participate; rates and level are untouched.
    pub fn apply_bonus(&mut self, bonus: &StatBlock) {
        self.hitpoints += bonus.hitpoints;
        self.max_hitpoints += bonus.max_hitpoints;
        self.armor += bonus.armor;
        self.magic_armor += bonus.magic_armor;
        self.attack += bonus.attack;
        self.magic_attack += bonus.magic_attack;
        self.mana += bonus.mana;
        self.max_mana += bonus.max_mana;
    }

    pub fn is_alive(&self) -> bool {
        self.hitpoints > 0
    }

    /// Subtracts damage directly. May leave hitpoints negative; the caller
    /// decides what <= 0 means.
    pub fn take_damage(&mut self, amount: i32) {
        self.hitpoints -= amount;
    }

    /// Restores hitpoints, clamped to the maximum. Returns the amount
    /// actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.max_hitpoints - self.hitpoints).max(0);
        self.hitpoints += healed;
        healed
    }

    /// Restores mana, clamped to the maximum. Returns the amount restored.
    pub fn restore_mana(&mut self, amount: i32) -> i32 {
        let restored = amount.min(self.max_mana - self.mana).max(0);
        self.mana += restored;
        restored
    }
}
