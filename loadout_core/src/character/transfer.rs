//! Slot-to-slot transfer (swap) between the inventory and the equipment panel

use super::{merge, Character};
use crate::container::Slot;
use crate::error::LoadoutError;
use crate::types::{EquipmentCategory, StatKind};
use std::fmt;
use std::str::FromStr;

/// Addresses one slot owned by a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRef {
    Inventory(usize),
    Equipment(EquipmentCategory),
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotRef::Inventory(index) => write!(f, "inv:{}", index),
            SlotRef::Equipment(category) => write!(f, "eq:{}", category.key()),
        }
    }
}

impl FromStr for SlotRef {
    type Err = String;

    /// `inv:<index>` or `eq:<category>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("expected inv:<n> or eq:<category>, got '{}'", s))?;
        match prefix {
            "inv" => rest
                .parse::<usize>()
                .map(SlotRef::Inventory)
                .map_err(|e| format!("bad inventory index '{}': {}", rest, e)),
            "eq" => rest.parse::<EquipmentCategory>().map(SlotRef::Equipment),
            other => Err(format!("unknown slot prefix '{}'", other)),
        }
    }
}

impl Character {
    pub fn slot(&self, at: SlotRef) -> Option<&Slot> {
        match at {
            SlotRef::Inventory(index) => self.inventory.slot(index),
            SlotRef::Equipment(category) => self.equipment.slot(category),
        }
    }

    /// Swap the contents of two slots, equipping or unequipping whatever
    /// crosses into or out of the equipment panel
    ///
    /// Both slots must accept each other's item. Equipment slots only take
    /// single units. Nothing changes when the transfer is refused.
    pub fn transfer(&mut self, from: SlotRef, to: SlotRef) -> Result<(), LoadoutError> {
        let source = self.slot(from).ok_or(LoadoutError::UnknownSlot)?;
        let dest = self.slot(to).ok_or(LoadoutError::UnknownSlot)?;
        if from == to {
            return Ok(());
        }

        if !dest.can_receive(source.item()) || !source.can_receive(dest.item()) {
            log::debug!("transfer {} -> {} refused: slot rejects item", from, to);
            return Err(LoadoutError::TransferRejected);
        }
        if (dest.is_equipment() && source.amount() > 1) || (source.is_equipment() && dest.amount() > 1) {
            log::debug!("transfer {} -> {} refused: stack into equipment", from, to);
            return Err(LoadoutError::TransferRejected);
        }

        let changed = match (from, to) {
            (SlotRef::Inventory(a), SlotRef::Inventory(b)) => {
                self.inventory.swap_slots(a, b);
                Vec::new()
            }
            (SlotRef::Inventory(index), SlotRef::Equipment(category))
            | (SlotRef::Equipment(category), SlotRef::Inventory(index)) => {
                self.swap_with_equipment(index, category)?
            }
            (SlotRef::Equipment(_), SlotRef::Equipment(_)) => {
                return Err(LoadoutError::UnsupportedTransfer);
            }
        };

        log::debug!("transferred {} <-> {}", from, to);
        self.notify(&changed);
        Ok(())
    }

    /// Run the stat transitions for an inventory/equipment swap, then swap
    fn swap_with_equipment(
        &mut self,
        index: usize,
        category: EquipmentCategory,
    ) -> Result<Vec<StatKind>, LoadoutError> {
        let (Some(inventory_slot), Some(equipment_slot)) = (
            self.inventory.slot_mut(index),
            self.equipment.slot_mut(category),
        ) else {
            return Err(LoadoutError::UnknownSlot);
        };

        let mut changed = Vec::new();
        if let Some(leaving) = equipment_slot.item() {
            merge(&mut changed, self.stats.unequip(leaving.instance_id()));
        }
        if let Some(entering) = inventory_slot.item() {
            merge(&mut changed, self.stats.equip(entering));
        }
        inventory_slot.swap_contents(equipment_slot);
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{EquipmentPanel, Inventory};
    use crate::item::{EquipmentBonuses, Item, ItemTemplate};
    use crate::stat_block::BaseStats;

    fn character() -> Character {
        Character::with_parts(BaseStats::default(), Inventory::new(4), EquipmentPanel::new())
    }

    fn helm(health_flat: i32) -> Item {
        Item::new(ItemTemplate::equippable(
            "helm",
            "Helm",
            EquipmentBonuses {
                health_flat,
                ..EquipmentBonuses::new(EquipmentCategory::Helmet)
            },
        ))
    }

    const HELMET: SlotRef = SlotRef::Equipment(EquipmentCategory::Helmet);

    #[test]
    fn test_parse_slot_ref() {
        assert_eq!("inv:3".parse::<SlotRef>(), Ok(SlotRef::Inventory(3)));
        assert_eq!("eq:helmet".parse::<SlotRef>(), Ok(HELMET));
        assert!("inv:x".parse::<SlotRef>().is_err());
        assert!("bag:1".parse::<SlotRef>().is_err());
        assert!("helmet".parse::<SlotRef>().is_err());
        assert_eq!(HELMET.to_string(), "eq:helmet");
    }

    #[test]
    fn test_transfer_into_equipment_equips() {
        let mut c = character();
        let item = helm(20);
        let id = item.instance_id();
        c.add_starting_item(item).unwrap();

        c.transfer(SlotRef::Inventory(0), HELMET).unwrap();
        assert_eq!(c.equipment().find(id), Some(EquipmentCategory::Helmet));
        assert!(c.inventory().slot(0).unwrap().is_empty());
        assert_eq!(c.stat(StatKind::Health).value(), 120.0);
    }

    #[test]
    fn test_transfer_out_of_equipment_unequips() {
        let mut c = character();
        let item = helm(20);
        let id = item.instance_id();
        c.add_starting_item(item).unwrap();
        c.equip(id).unwrap();

        c.transfer(HELMET, SlotRef::Inventory(3)).unwrap();
        assert_eq!(c.inventory().find(id), Some(3));
        assert_eq!(c.stat(StatKind::Health).value(), 100.0);
    }

    #[test]
    fn test_transfer_swaps_equipped_items() {
        let mut c = character();
        let worn = helm(20);
        let spare = helm(5);
        let (worn_id, spare_id) = (worn.instance_id(), spare.instance_id());
        c.add_starting_item(worn).unwrap();
        c.add_starting_item(spare).unwrap();
        c.equip(worn_id).unwrap();

        c.transfer(SlotRef::Inventory(1), HELMET).unwrap();
        assert_eq!(c.equipment().find(spare_id), Some(EquipmentCategory::Helmet));
        assert_eq!(c.inventory().find(worn_id), Some(1));
        assert_eq!(c.stat(StatKind::Health).value(), 105.0);
    }

    #[test]
    fn test_transfer_non_equippable_refused() {
        let mut c = character();
        let rock = Item::new(ItemTemplate::new("rock", "Rock"));
        let id = rock.instance_id();
        c.add_starting_item(rock).unwrap();

        assert_eq!(
            c.transfer(SlotRef::Inventory(0), HELMET),
            Err(LoadoutError::TransferRejected)
        );
        assert_eq!(c.inventory().find(id), Some(0));
        assert!(c.equipment().get(EquipmentCategory::Helmet).is_none());
        assert_eq!(c.stat(StatKind::Health).modifier_count(), 0);
    }

    #[test]
    fn test_transfer_rejects_equipped_item_back_into_wrong_slot() {
        let mut c = character();
        let worn = helm(20);
        let worn_id = worn.instance_id();
        c.add_starting_item(worn).unwrap();
        c.equip(worn_id).unwrap();
        c.add_starting_item(Item::new(ItemTemplate::new("rock", "Rock")))
            .unwrap();

        assert_eq!(
            c.transfer(HELMET, SlotRef::Inventory(0)),
            Err(LoadoutError::TransferRejected)
        );
        assert_eq!(c.stat(StatKind::Health).value(), 120.0);
    }

    #[test]
    fn test_transfer_between_inventory_slots() {
        let mut c = character();
        let item = helm(20);
        let id = item.instance_id();
        c.add_starting_item(item).unwrap();

        c.transfer(SlotRef::Inventory(0), SlotRef::Inventory(2)).unwrap();
        assert_eq!(c.inventory().find(id), Some(2));
        assert_eq!(c.stat(StatKind::Health).modifier_count(), 0);
    }

    #[test]
    fn test_transfer_stack_into_equipment_refused() {
        let mut c = character();
        let first = Item::new(
            ItemTemplate::equippable("cap", "Cap", EquipmentBonuses::new(EquipmentCategory::Helmet))
                .with_max_stack(4),
        );
        let second = first.split();
        c.add_starting_item(first).unwrap();
        c.add_starting_item(second).unwrap();

        assert_eq!(
            c.transfer(SlotRef::Inventory(0), HELMET),
            Err(LoadoutError::TransferRejected)
        );
        assert_eq!(c.inventory().slot(0).unwrap().amount(), 2);
    }

    #[test]
    fn test_transfer_unknown_and_unsupported() {
        let mut c = character();
        assert_eq!(
            c.transfer(SlotRef::Inventory(9), HELMET),
            Err(LoadoutError::UnknownSlot)
        );
        assert_eq!(
            c.transfer(HELMET, SlotRef::Equipment(EquipmentCategory::Boots)),
            Err(LoadoutError::UnsupportedTransfer)
        );
        assert_eq!(c.transfer(HELMET, HELMET), Ok(()));
    }
}
