//! Characters: the player, hireable party members, stats and progression.

pub mod party;
pub mod player;
pub mod progression;
pub mod stats;

pub use party::{generate_npc, NameLedger, Npc};
pub use player::Player;
pub use progression::Progression;
pub use stats::StatBlock;
