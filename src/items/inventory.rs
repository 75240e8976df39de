use serde::{Deserialize, Serialize};

use crate::content::ContentRegistry;
use crate::economy::Economy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Potion,
    Provision,
    Equipment,
}

/// One stack of identical items, referencing its catalog row by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLine {
    pub kind: ItemKind,
    pub index: usize,
    pub quantity: u32,
    pub enchanted: bool,
}

/// The player's carried items. Purely bookkeeping: applying an item's
/// effects is the effect resolver's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    lines: Vec<ItemLine>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[ItemLine] {
        &self.lines
    }

    pub fn add(&mut self, kind: ItemKind, index: usize, amount: u32) {
        for line in &mut self.lines {
            if line.kind == kind && line.index == index {
                line.quantity += amount;
                return;
            }
        }
        self.lines.push(ItemLine {
            kind,
            index,
            quantity: amount,
            enchanted: false,
        });
    }

    pub fn quantity(&self, kind: ItemKind, index: usize) -> u32 {
        self.lines
            .iter()
            .find(|l| l.kind == kind && l.index == index)
            .map_or(0, |l| l.quantity)
    }

    /// Consumes one item from a stack; empty stacks are dropped. Returns
    /// `false` when nothing was held.
    pub fn consume(&mut self, kind: ItemKind, index: usize) -> bool {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.kind == kind && l.index == index)
        else {
            return false;
        };
        line.quantity -= 1;
        self.lines.retain(|l| l.quantity > 0);
        true
    }

    pub fn mark_enchanted(&mut self, index: usize) {
        for line in &mut self.lines {
            if line.kind == ItemKind::Equipment && line.index == index {
                line.enchanted = true;
            }
        }
    }

    /// Buys one item: the purse pays atomically or the purchase does not
    /// happen. Inventory is only touched on a successful payment.
    pub fn purchase(
        &mut self,
        purse: &mut Economy,
        kind: ItemKind,
        index: usize,
        price: &Economy,
    ) -> bool {
        if !purse.subtract(price.platinum, price.gold, price.silver, price.copper) {
            return false;
        }
        self.add(kind, index, 1);
        true
    }

    /// Convenience for shop flows: looks the price up in the catalog.
    pub fn purchase_potion(
        &mut self,
        purse: &mut Economy,
        registry: &ContentRegistry,
        index: usize,
    ) -> bool {
        match registry.potion(index) {
            Ok(def) => {
                let price = def.price;
                self.purchase(purse, ItemKind::Potion, index, &price)
            }
            Err(_) => false,
        }
    }
}
