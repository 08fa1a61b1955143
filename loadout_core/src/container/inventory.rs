//! Inventory - Fixed-size row of general slots with stacking

use super::Slot;
use crate::item::{Catalog, InstanceId, Item};
use crate::types::ItemId;

/// Player inventory
#[derive(Debug)]
pub struct Inventory {
    slots: Vec<Slot>,
}

impl Inventory {
    /// Create an inventory with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        Inventory {
            slots: (0..capacity).map(|_| Slot::general()).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    /// True when no slot is empty (a stack with room still counts as full)
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// Exchange the contents of two slots
    pub(crate) fn swap_slots(&mut self, a: usize, b: usize) {
        if a != b {
            self.slots.swap(a, b);
        }
    }

    /// Check whether [`add_item`](Self::add_item) would succeed
    pub fn can_accept(&self, item: &Item) -> bool {
        self.slots
            .iter()
            .any(|s| s.can_add_stack(item) || s.is_empty())
    }

    /// Store an item, stacking onto an existing slot first, else the first empty slot
    ///
    /// Returns the slot index used. On failure the item is handed back.
    pub fn add_item(&mut self, item: Item) -> Result<usize, Item> {
        if let Some(index) = self.slots.iter().position(|s| s.can_add_stack(&item)) {
            self.slots[index].add_stack(item);
            return Ok(index);
        }
        if let Some(index) = self.slots.iter().position(Slot::is_empty) {
            self.slots[index].place(item, 1);
            return Ok(index);
        }
        Err(item)
    }

    /// Slot index currently holding this instance
    pub fn find(&self, instance: InstanceId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.item().is_some_and(|i| i.instance_id() == instance))
    }

    /// Remove one unit of this exact instance
    pub fn remove_item(&mut self, instance: InstanceId) -> Option<Item> {
        let index = self.find(instance)?;
        self.slots[index].take_one()
    }

    /// Remove one unit of any instance with this catalog ID
    pub fn remove_item_by_id(&mut self, id: &ItemId) -> Option<Item> {
        self.slots
            .iter_mut()
            .find(|s| s.item().is_some_and(|i| i.id() == id))
            .and_then(Slot::take_one)
    }

    /// Total units of a catalog ID across all slots
    pub fn item_count(&self, id: &ItemId) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.item().is_some_and(|i| i.id() == id))
            .map(Slot::amount)
            .sum()
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.take_all();
        }
    }

    /// Clear, then add a fresh instance of each listed template
    ///
    /// Returns the IDs that were unknown or did not fit.
    pub fn set_starting_items(&mut self, catalog: &Catalog, ids: &[ItemId]) -> Vec<ItemId> {
        self.clear();
        let mut rejected = Vec::new();
        for id in ids {
            let stored = catalog
                .instantiate(id)
                .is_some_and(|item| self.add_item(item).is_ok());
            if !stored {
                log::warn!("starting item '{}' could not be placed", id);
                rejected.push(id.clone());
            }
        }
        rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemTemplate;

    fn arrows() -> Item {
        Item::new(ItemTemplate::new("arrow", "Arrow").with_max_stack(5))
    }

    #[test]
    fn test_stacking_fills_then_spills() {
        let mut inventory = Inventory::new(4);
        let first = arrows();
        for _ in 0..5 {
            assert_eq!(inventory.add_item(first.split()).ok(), Some(0));
        }
        assert_eq!(inventory.slot(0).unwrap().amount(), 5);

        assert_eq!(inventory.add_item(first.split()).ok(), Some(1));
        assert_eq!(inventory.slot(1).unwrap().amount(), 1);
        assert_eq!(inventory.item_count(&ItemId::from("arrow")), 6);
    }

    #[test]
    fn test_stack_preferred_over_earlier_empty_slot() {
        let mut inventory = Inventory::new(3);
        let rock = Item::new(ItemTemplate::new("rock", "Rock"));
        let rock_id = rock.instance_id();
        inventory.add_item(rock).unwrap();
        inventory.add_item(arrows()).unwrap();
        inventory.remove_item(rock_id).unwrap();

        assert_eq!(inventory.add_item(arrows()).ok(), Some(1));
        assert!(inventory.slot(0).unwrap().is_empty());
    }

    #[test]
    fn test_full_inventory_returns_item() {
        let mut inventory = Inventory::new(1);
        inventory.add_item(Item::new(ItemTemplate::new("rock", "Rock"))).unwrap();
        assert!(inventory.is_full());

        let sword = Item::new(ItemTemplate::new("sword", "Sword"));
        let sword_id = sword.instance_id();
        let rejected = inventory.add_item(sword).unwrap_err();
        assert_eq!(rejected.instance_id(), sword_id);
        assert!(!inventory.can_accept(&rejected));
    }

    #[test]
    fn test_full_inventory_still_accepts_stack() {
        let mut inventory = Inventory::new(1);
        let first = arrows();
        let unit = first.split();
        inventory.add_item(first).unwrap();
        assert!(inventory.is_full());
        assert!(inventory.can_accept(&unit));
        assert!(inventory.add_item(unit).is_ok());
    }

    #[test]
    fn test_remove_by_identity() {
        let mut inventory = Inventory::new(2);
        let a = Item::new(ItemTemplate::new("rock", "Rock"));
        let b = a.split();
        let (a_id, b_id) = (a.instance_id(), b.instance_id());
        inventory.add_item(a).unwrap();
        inventory.add_item(b).unwrap();

        let removed = inventory.remove_item(b_id).unwrap();
        assert_eq!(removed.instance_id(), b_id);
        assert!(inventory.slot(1).unwrap().is_empty());
        assert!(inventory.remove_item(b_id).is_none());
        assert_eq!(inventory.find(a_id), Some(0));
    }

    #[test]
    fn test_remove_from_stack_decrements() {
        let mut inventory = Inventory::new(2);
        let first = arrows();
        let first_id = first.instance_id();
        let unit = first.split();
        inventory.add_item(first).unwrap();
        inventory.add_item(unit).unwrap();

        let removed = inventory.remove_item(first_id).unwrap();
        assert_eq!(removed.instance_id(), first_id);
        assert_eq!(inventory.slot(0).unwrap().amount(), 1);
        assert!(inventory.find(first_id).is_none());

        assert!(inventory.remove_item_by_id(&ItemId::from("arrow")).is_some());
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_starting_items_reports_rejects() {
        let catalog = Catalog::from_templates(vec![
            ItemTemplate::new("rock", "Rock"),
            ItemTemplate::new("arrow", "Arrow").with_max_stack(5),
        ])
        .unwrap();
        let mut inventory = Inventory::new(2);
        inventory.add_item(Item::new(ItemTemplate::new("junk", "Junk"))).unwrap();

        let ids: Vec<ItemId> = ["arrow", "arrow", "ghost", "rock", "rock"]
            .into_iter()
            .map(ItemId::from)
            .collect();
        let rejected = inventory.set_starting_items(&catalog, &ids);

        assert_eq!(rejected, vec![ItemId::from("ghost"), ItemId::from("rock")]);
        assert_eq!(inventory.item_count(&ItemId::from("arrow")), 2);
        assert_eq!(inventory.item_count(&ItemId::from("junk")), 0);
        assert!(inventory.is_full());
    }
}
