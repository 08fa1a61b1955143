//! ItemChest - A fixed supply of one item that empties into an inventory

use super::Inventory;
use crate::item::{Catalog, Item};
use crate::types::ItemId;

/// Dispenses fresh instances of one template
#[derive(Debug)]
pub struct ItemChest {
    prototype: Item,
    remaining: u32,
}

impl ItemChest {
    pub fn new(prototype: Item, amount: u32) -> Self {
        ItemChest {
            prototype,
            remaining: amount,
        }
    }

    pub fn from_catalog(catalog: &Catalog, id: &ItemId, amount: u32) -> Option<Self> {
        catalog.instantiate(id).map(|prototype| Self::new(prototype, amount))
    }

    pub fn item(&self) -> &Item {
        &self.prototype
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Move as many units as the inventory accepts, returning how many moved
    pub fn open(&mut self, inventory: &mut Inventory) -> u32 {
        let mut moved = 0;
        while self.remaining > 0 {
            if inventory.add_item(self.prototype.split()).is_err() {
                log::debug!(
                    "chest of '{}' stopped with {} left: inventory refused",
                    self.prototype.id(),
                    self.remaining
                );
                break;
            }
            self.remaining -= 1;
            moved += 1;
        }
        moved
    }
}
