//! Turn-based combat: the combatant capability trait, the attack engine,
//! enemy scaling/selection, and the round-driven combat session.

pub mod combatant;
pub mod enemy;
pub mod engine;
pub mod session;

pub use combatant::Combatant;
pub use enemy::{enemy_by_name, grant_rewards, random_enemy, scale_for_context, Enemy};
pub use engine::{attack, AttackOutcome};
pub use session::{
    ActionSource, CombatEvent, CombatSession, Outcome, PlayerAction, SessionReport, SessionState,
    SessionView,
};
