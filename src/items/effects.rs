//! Applies and reverses the stat deltas contributed by gear and potions.
//!
//! Every mutation here must be exactly reversible: `unequip` subtracts what
//! `equip` added, and a replaced or expired buff subtracts everything it
//! applied. The player's stat block never drifts from equip churn alone.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::player::Player;
use crate::content::{ContentError, ContentRegistry, EquipmentKind};

/// Occupancy of the three gear slots, each holding an equipment-catalog
/// index. A slot must be emptied before it can be filled again.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EquipSlots {
    pub weapon: Option<usize>,
    pub armor: Option<usize>,
    pub staff: Option<usize>,
}

impl EquipSlots {
    fn slot_mut(&mut self, kind: EquipmentKind) -> &mut Option<usize> {
        match kind {
            EquipmentKind::Weapon => &mut self.weapon,
            EquipmentKind::Armor => &mut self.armor,
            EquipmentKind::Staff => &mut self.staff,
        }
    }

    pub fn get(&self, kind: EquipmentKind) -> Option<usize> {
        match kind {
            EquipmentKind::Weapon => self.weapon,
            EquipmentKind::Armor => self.armor,
            EquipmentKind::Staff => self.staff,
        }
    }
}

/// The single active timed buff from a consumed potion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveBuff {
    pub name: String,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub magic_attack_bonus: i32,
    pub magic_defense_bonus: i32,
    pub max_mana_bonus: i32,
    pub crit_rate_bonus: f32,
    pub crit_damage_bonus: f32,
    pub remaining_turns: i32,
}

/// Resolver for gear slots and consumable effects on one player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipResolver {
    pub slots: EquipSlots,
    active_buff: Option<ActiveBuff>,
}

impl EquipResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_buff(&self) -> Option<&ActiveBuff> {
        self.active_buff.as_ref()
    }

    /// Equips the catalog item into its slot. Returns `Ok(false)` without
    /// touching anything when the slot is occupied; the caller unequips
    /// first.
    pub fn equip(
        &mut self,
        player: &mut Player,
        registry: &ContentRegistry,
        index: usize,
    ) -> Result<bool, ContentError> {
        let def = registry.equipment(index)?;
        if self.slots.get(def.kind).is_some() {
            return Ok(false);
        }

        match def.kind {
            EquipmentKind::Armor => {
                player.stats.armor += def.defense_increase as f32;
                player.stats.magic_armor += def.magic_defense_increase as f32;
            }
            EquipmentKind::Weapon => {
                player.stats.attack += def.attack_increase;
                player.stats.magic_attack += def.magic_attack_increase;
                player.weapon_debuffs = def.debuffs.clone();
                player.weapon_debuff_chance = def.debuff_chance;
            }
            EquipmentKind::Staff => {
                player.stats.magic_attack += def.magic_attack_increase;
                player.stats.magic_attack += self.staff_spell_bonus(player, registry)?;
            }
        }

        *self.slots.slot_mut(def.kind) = Some(index);
        debug!(item = %def.name, "equipped");
        Ok(true)
    }

    /// Empties a slot, subtracting exactly what `equip` added. A no-op on an
    /// empty slot.
    pub fn unequip(
        &mut self,
        player: &mut Player,
        registry: &ContentRegistry,
        kind: EquipmentKind,
    ) -> Result<bool, ContentError> {
        let Some(index) = self.slots.get(kind) else {
            return Ok(false);
        };
        let def = registry.equipment(index)?;

        match kind {
            EquipmentKind::Armor => {
                player.stats.armor -= def.defense_increase as f32;
                player.stats.magic_armor -= def.magic_defense_increase as f32;
            }
            EquipmentKind::Weapon => {
                player.stats.attack -= def.attack_increase;
                player.stats.magic_attack -= def.magic_attack_increase;
                player.weapon_debuffs.clear();
                player.weapon_debuff_chance = 0.0;
            }
            EquipmentKind::Staff => {
                player.stats.magic_attack -= def.magic_attack_increase;
                player.stats.magic_attack -= self.staff_spell_bonus(player, registry)?;
            }
        }

        *self.slots.slot_mut(kind) = None;
        debug!(item = %def.name, "unequipped");
        Ok(true)
    }

    /// Enchants the equipped weapon with a debuff: the name joins the
    /// weapon's proc set, rolling at the weapon's own proc chance. Requires
    /// an occupied weapon slot and a debuff that allows weapon enchantment.
    /// The enchantment lives on the equipped state, not the catalog row, so
    /// unequipping discards it.
    pub fn enchant_weapon(
        &mut self,
        player: &mut Player,
        registry: &ContentRegistry,
        debuff_name: &str,
    ) -> Result<bool, ContentError> {
        let def = registry.debuff(debuff_name)?;
        let Some(index) = self.slots.weapon else {
            return Ok(false);
        };
        if !def.application.enchant_on_weapon {
            return Ok(false);
        }
        let weapon = registry.equipment(index)?;
        player.weapon_debuffs.push(def.name.clone());
        player.weapon_debuff_chance = weapon.debuff_chance;
        Ok(true)
    }

    /// Enchants the equipped staff with a spell: the spell joins the staff
    /// set and its damage-scaled bonus applies immediately. Requires an
    /// occupied staff slot.
    pub fn enchant_staff(
        &mut self,
        player: &mut Player,
        registry: &ContentRegistry,
        spell_name: &str,
    ) -> Result<bool, ContentError> {
        let spell = registry.spell(spell_name)?;
        if self.slots.staff.is_none() || !spell.applicable_on_staffs {
            return Ok(false);
        }
        player.staff_spells.push(spell.name.clone());
        player.stats.magic_attack +=
            (spell.health_damage as f32 * spell.staff_bonus_modifier).round() as i32;
        Ok(true)
    }

    fn staff_spell_bonus(
        &self,
        player: &Player,
        registry: &ContentRegistry,
    ) -> Result<i32, ContentError> {
        let mut bonus = 0;
        for name in &player.staff_spells {
            let spell = registry.spell(name)?;
            bonus += (spell.health_damage as f32 * spell.staff_bonus_modifier).round() as i32;
        }
        Ok(bonus)
    }

    /// Drinks a potion: instant restoration applies at once, and any timed
    /// component replaces the current buff (which is fully reversed first;
    /// at most one timed buff exists at any moment).
    pub fn use_potion(
        &mut self,
        player: &mut Player,
        registry: &ContentRegistry,
        index: usize,
    ) -> Result<(), ContentError> {
        let def = registry.potion(index)?.clone();

        if def.hp_restore > 0 {
            player.stats.heal(def.hp_restore);
        }
        if def.mana_restore > 0 {
            player.stats.restore_mana(def.mana_restore);
        }

        if def.duration_turns > 0 {
            self.remove_buff(player);

            player.stats.attack += def.attack_effect;
            player.stats.armor += def.defense_effect as f32;
            player.stats.magic_attack += def.magic_effect;
            player.stats.magic_armor += def.magic_defense_effect as f32;
            player.stats.crit_rate += def.crit_rate_effect;
            player.stats.crit_damage += def.crit_damage_effect;
            if def.max_mana_increase > 0 {
                player.stats.max_mana += def.max_mana_increase;
                player.stats.mana += def.max_mana_increase;
            }

            self.active_buff = Some(ActiveBuff {
                name: def.name.clone(),
                attack_bonus: def.attack_effect,
                defense_bonus: def.defense_effect,
                magic_attack_bonus: def.magic_effect,
                magic_defense_bonus: def.magic_defense_effect,
                max_mana_bonus: def.max_mana_increase,
                crit_rate_bonus: def.crit_rate_effect,
                crit_damage_bonus: def.crit_damage_effect,
                remaining_turns: def.duration_turns,
            });
            debug!(potion = %def.name, turns = def.duration_turns, "buff applied");
        }

        Ok(())
    }

    /// Eats food or drink: instant restoration plus permanent max-pool
    /// bonuses.
    pub fn use_provision(
        &mut self,
        player: &mut Player,
        registry: &ContentRegistry,
        index: usize,
    ) -> Result<(), ContentError> {
        let def = registry.provision(index)?;

        if def.health_restoration > 0 {
            player.stats.heal(def.health_restoration);
        }
        if def.mana_restoration > 0 {
            player.stats.restore_mana(def.mana_restoration);
        }
        if def.max_health_bonus > 0 {
            player.stats.max_hitpoints += def.max_health_bonus;
        }
        if def.max_mana_bonus > 0 {
            player.stats.max_mana += def.max_mana_bonus;
        }

        Ok(())
    }

    /// Advances the active buff by one combat round. Call exactly once per
    /// resolved round, however many attacks it contained. Returns the name
    /// of a buff that wore off this round.
    pub fn tick_buffs(&mut self, player: &mut Player) -> Option<String> {
        let buff = self.active_buff.as_mut()?;
        buff.remaining_turns -= 1;
        if buff.remaining_turns > 0 {
            return None;
        }
        let name = buff.name.clone();
        self.remove_buff(player);
        debug!(buff = %name, "buff expired");
        Some(name)
    }

    fn remove_buff(&mut self, player: &mut Player) {
        let Some(buff) = self.active_buff.take() else {
            return;
        };
        player.stats.attack -= buff.attack_bonus;
        player.stats.armor -= buff.defense_bonus as f32;
        player.stats.magic_attack -= buff.magic_attack_bonus;
        player.stats.magic_armor -= buff.magic_defense_bonus as f32;
        player.stats.crit_rate -= buff.crit_rate_bonus;
        player.stats.crit_damage -= buff.crit_damage_bonus;
        player.stats.max_mana -= buff.max_mana_bonus;
        if player.stats.mana > player.stats.max_mana {
            player.stats.mana = player.stats.max_mana;
        }
    }
}
