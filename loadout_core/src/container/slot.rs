//! Slot - A single storage cell holding an item and a quantity

use crate::item::Item;
use crate::types::EquipmentCategory;

/// What a slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Inventory cell, accepts anything
    General,
    /// Equipment cell, accepts only items of one category
    Equipment(EquipmentCategory),
}

/// A storage cell
///
/// Invariant: `amount == 0` exactly when `item` is `None`. Contents only
/// change through the owning container or character.
#[derive(Debug)]
pub struct Slot {
    kind: SlotKind,
    item: Option<Item>,
    amount: u32,
}

impl Slot {
    pub fn general() -> Self {
        Slot {
            kind: SlotKind::General,
            item: None,
            amount: 0,
        }
    }

    pub fn equipment(category: EquipmentCategory) -> Self {
        Slot {
            kind: SlotKind::Equipment(category),
            item: None,
            amount: 0,
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Category for equipment slots, `None` for general slots
    pub fn category(&self) -> Option<EquipmentCategory> {
        match self.kind {
            SlotKind::Equipment(category) => Some(category),
            SlotKind::General => None,
        }
    }

    pub fn is_equipment(&self) -> bool {
        matches!(self.kind, SlotKind::Equipment(_))
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// True if `item` can stack one more unit onto this slot's contents
    pub fn can_add_stack(&self, item: &Item) -> bool {
        match &self.item {
            Some(resident) => resident.id() == item.id() && self.amount < item.max_stack(),
            None => false,
        }
    }

    /// Acceptance rule; an absent item is always acceptable
    pub fn can_receive(&self, item: Option<&Item>) -> bool {
        match (self.kind, item) {
            (_, None) => true,
            (SlotKind::General, Some(_)) => true,
            (SlotKind::Equipment(category), Some(item)) => item.category() == Some(category),
        }
    }

    /// Replace the contents, returning the previous item and amount
    pub(crate) fn place(&mut self, item: Item, amount: u32) -> Option<(Item, u32)> {
        debug_assert!(amount > 0);
        let previous = self.take_all();
        self.item = Some(item);
        self.amount = amount;
        previous
    }

    /// Absorb one more unit into the current stack; the incoming instance is dropped
    pub(crate) fn add_stack(&mut self, _unit: Item) {
        debug_assert!(self.item.is_some());
        self.amount += 1;
    }

    /// Take a single unit out
    ///
    /// The resident instance is handed out; if units remain, a fresh
    /// instance of the same template stays behind.
    pub(crate) fn take_one(&mut self) -> Option<Item> {
        let resident = self.item.take()?;
        if self.amount > 1 {
            self.item = Some(resident.split());
            self.amount -= 1;
        } else {
            self.amount = 0;
        }
        Some(resident)
    }

    /// Undo a [`take_one`](Self::take_one), making `unit` the resident again
    pub(crate) fn restore_one(&mut self, unit: Item) {
        self.item = Some(unit);
        self.amount += 1;
    }

    /// Empty the slot, returning whatever it held
    pub(crate) fn take_all(&mut self) -> Option<(Item, u32)> {
        let amount = std::mem::take(&mut self.amount);
        self.item.take().map(|item| (item, amount))
    }

    /// Exchange item and amount with another slot
    pub(crate) fn swap_contents(&mut self, other: &mut Slot) {
        std::mem::swap(&mut self.item, &mut other.item);
        std::mem::swap(&mut self.amount, &mut other.amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{EquipmentBonuses, ItemTemplate};

    fn potion() -> Item {
        Item::new(ItemTemplate::new("potion", "Potion").with_max_stack(3))
    }

    fn boots() -> Item {
        Item::new(ItemTemplate::equippable(
            "boots",
            "Boots",
            EquipmentBonuses::new(EquipmentCategory::Boots),
        ))
    }

    #[test]
    fn test_can_add_stack_respects_limit() {
        let mut slot = Slot::general();
        let first = potion();
        assert!(!slot.can_add_stack(&first));

        let unit = first.split();
        slot.place(first, 1);
        assert!(slot.can_add_stack(&unit));
        slot.add_stack(unit);
        let unit = slot.item().unwrap().split();
        slot.add_stack(unit);
        assert_eq!(slot.amount(), 3);
        assert!(!slot.can_add_stack(&potion()));
    }

    #[test]
    fn test_can_add_stack_needs_same_id() {
        let mut slot = Slot::general();
        slot.place(potion(), 1);
        assert!(!slot.can_add_stack(&boots()));
    }

    #[test]
    fn test_equipment_slot_acceptance() {
        let slot = Slot::equipment(EquipmentCategory::Boots);
        assert!(slot.can_receive(None));
        assert!(slot.can_receive(Some(&boots())));
        assert!(!slot.can_receive(Some(&potion())));
        assert!(!Slot::equipment(EquipmentCategory::Helmet).can_receive(Some(&boots())));
        assert!(Slot::general().can_receive(Some(&potion())));
    }

    #[test]
    fn test_take_one_hands_out_resident() {
        let mut slot = Slot::general();
        let first = potion();
        let first_id = first.instance_id();
        let unit = first.split();
        slot.place(first, 1);
        slot.add_stack(unit);

        let taken = slot.take_one().unwrap();
        assert_eq!(taken.instance_id(), first_id);
        assert_eq!(slot.amount(), 1);
        assert_ne!(slot.item().unwrap().instance_id(), first_id);

        slot.restore_one(taken);
        assert_eq!(slot.amount(), 2);
        assert_eq!(slot.item().unwrap().instance_id(), first_id);
    }

    #[test]
    fn test_take_last_unit_clears_slot() {
        let mut slot = Slot::general();
        slot.place(potion(), 1);
        assert!(slot.take_one().is_some());
        assert!(slot.is_empty());
        assert_eq!(slot.amount(), 0);
        assert!(slot.take_one().is_none());
    }
}
