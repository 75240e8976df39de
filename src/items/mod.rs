//! Inventory bookkeeping and the equipment/buff effect resolver.

pub mod effects;
pub mod inventory;

pub use effects::{ActiveBuff, EquipResolver, EquipSlots};
pub use inventory::{Inventory, ItemKind, ItemLine};
