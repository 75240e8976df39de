//! Applies travel-event rewards and penalties to the player.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character::player::Player;
use crate::character::progression::Progression;
use crate::content::EventDef;

/// What an event actually did once clamps were applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventApplication {
    /// Silver delta actually applied; a loss the purse could not cover
    /// applies as zero.
    pub silver_change: i64,
    pub experience_change: f32,
    pub levels_gained: u32,
    pub health_change: i32,
    pub mana_change: i32,
    /// A forced encounter for the caller to run: enemy template name and
    /// count.
    pub encounter: Option<(String, u32)>,
}

/// Applies an event's deltas with the original clamps: lethal penalties
/// leave 1 hitpoint, mana floors at zero, experience never goes negative,
/// and a currency loss is skipped entirely when the purse cannot pay.
pub fn apply_event(
    player: &mut Player,
    progression: &mut Progression,
    event: &EventDef,
) -> EventApplication {
    let mut outcome = EventApplication::default();
    debug!(event = %event.name, "applying event");

    if event.silver_delta != 0 {
        if event.silver_delta > 0 {
            player.economy.add(0, 0, event.silver_delta as i64, 0);
            outcome.silver_change = event.silver_delta as i64;
        } else {
            let loss = (-event.silver_delta) as i64;
            if player.economy.subtract(0, 0, loss, 0) {
                outcome.silver_change = -loss;
            }
        }
    }

    if event.experience_delta != 0 {
        if event.experience_delta > 0 {
            let amount = event.experience_delta as f32;
            progression.grant_experience(&mut player.stats, amount);
            outcome.experience_change = amount;
            outcome.levels_gained = progression.check_level_up(&mut player.stats);
        } else {
            let loss = (-event.experience_delta) as f32;
            let applied = loss.min(player.stats.experience);
            player.stats.experience = (player.stats.experience - loss).max(0.0);
            outcome.experience_change = -applied;
        }
    }

    if event.health_delta != 0 {
        if event.health_delta > 0 {
            outcome.health_change = player.stats.heal(event.health_delta);
        } else {
            let damage = -event.health_delta;
            player.stats.hitpoints -= damage;
            if player.stats.hitpoints <= 0 {
                player.stats.hitpoints = 1;
            }
            outcome.health_change = -damage;
        }
    }

    if event.mana_delta != 0 {
        if event.mana_delta > 0 {
            outcome.mana_change = player.stats.restore_mana(event.mana_delta);
        } else {
            let drain = -event.mana_delta;
            let applied = drain.min(player.stats.mana);
            player.stats.mana = (player.stats.mana - drain).max(0);
            outcome.mana_change = -applied;
        }
    }

    if let Some(enemy) = &event.enemy {
        outcome.encounter = Some((enemy.clone(), event.enemy_count));
    }

    outcome
}
