//! Wayfarer - combat and progression core for a menu-driven text RPG.
//!
//! This library implements the parts of the game with real rules in them:
//! turn-based combat resolution, the derived-stat model over equipment and
//! timed buffs, enemy scaling, the leveling curve, and the four-denomination
//! economy. The menu/travel UI layer that drives it lives elsewhere; it
//! constructs enemies from the content registry, runs combat sessions, and
//! hands victories to the progression engine.

pub mod character;
pub mod combat;
pub mod content;
pub mod core;
pub mod economy;
pub mod items;
pub mod world;

pub use character::{NameLedger, Npc, Player, Progression, StatBlock};
pub use combat::{CombatSession, Enemy, Outcome, PlayerAction, SessionReport};
pub use content::{ContentError, ContentRegistry, LocationType};
pub use economy::Economy;
pub use items::{EquipResolver, Inventory};
