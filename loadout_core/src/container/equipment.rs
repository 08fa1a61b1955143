//! EquipmentPanel - One restricted slot per equipment category

use super::Slot;
use crate::item::{InstanceId, Item};
use crate::types::EquipmentCategory;

/// Equipped items, one slot per category in use
#[derive(Debug)]
pub struct EquipmentPanel {
    slots: Vec<Slot>,
}

impl Default for EquipmentPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl EquipmentPanel {
    /// A panel with a slot for every category
    pub fn new() -> Self {
        Self::with_categories(EquipmentCategory::all())
    }

    /// A panel with slots for the given categories; duplicates are ignored
    pub fn with_categories(categories: &[EquipmentCategory]) -> Self {
        let mut slots: Vec<Slot> = Vec::with_capacity(categories.len());
        for category in categories {
            if !slots.iter().any(|s| s.category() == Some(*category)) {
                slots.push(Slot::equipment(*category));
            }
        }
        EquipmentPanel { slots }
    }

    pub fn categories(&self) -> impl Iterator<Item = EquipmentCategory> + '_ {
        self.slots.iter().filter_map(Slot::category)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, category: EquipmentCategory) -> Option<&Slot> {
        self.slots.iter().find(|s| s.category() == Some(category))
    }

    pub(crate) fn slot_mut(&mut self, category: EquipmentCategory) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| s.category() == Some(category))
    }

    /// Item equipped in a category
    pub fn get(&self, category: EquipmentCategory) -> Option<&Item> {
        self.slot(category).and_then(Slot::item)
    }

    /// All equipped items with their category
    pub fn equipped(&self) -> impl Iterator<Item = (EquipmentCategory, &Item)> + '_ {
        self.slots
            .iter()
            .filter_map(|s| Some((s.category()?, s.item()?)))
    }

    /// Category slot currently holding this instance
    pub fn find(&self, instance: InstanceId) -> Option<EquipmentCategory> {
        self.slots
            .iter()
            .find(|s| s.item().is_some_and(|i| i.instance_id() == instance))
            .and_then(Slot::category)
    }

    /// Place an item in its category's slot, returning whatever was there
    ///
    /// Fails, handing the item back, when the item is not equippable or the
    /// panel has no slot for its category.
    pub fn add_item(&mut self, item: Item) -> Result<Option<Item>, Item> {
        let Some(category) = item.category() else {
            return Err(item);
        };
        match self.slot_mut(category) {
            Some(slot) => Ok(slot.place(item, 1).map(|(previous, _)| previous)),
            None => Err(item),
        }
    }

    /// Take this exact instance out of the panel
    pub fn remove_item(&mut self, instance: InstanceId) -> Option<Item> {
        let category = self.find(instance)?;
        self.slot_mut(category)?.take_all().map(|(item, _)| item)
    }

    /// Put a previously displaced item back into its slot
    pub(crate) fn restore(&mut self, category: EquipmentCategory, item: Item) -> Option<Item> {
        self.slot_mut(category)?
            .place(item, 1)
            .map(|(displaced, _)| displaced)
    }
}
