//! Character - Stats kept in lockstep with what the inventory and equipment hold
//!
//! A character, its inventory and its equipment panel form one consistency
//! domain: every transaction here either commits fully or leaves all three
//! untouched.

mod observer;
mod transfer;

pub use observer::StatObserver;
pub use transfer::SlotRef;

use crate::config::CharacterConfig;
use crate::container::{EquipmentPanel, Inventory, Slot};
use crate::error::LoadoutError;
use crate::item::{Catalog, InstanceId, Item};
use crate::stat_block::{BaseStats, StatBlock, StatValue};
use crate::tooltip::{ItemTooltip, StatTooltip};
use crate::types::StatKind;
use std::fmt;

pub struct Character {
    stats: StatBlock,
    inventory: Inventory,
    equipment: EquipmentPanel,
    /// Healing never raises health base above this
    max_base_health: f64,
    observers: Vec<Box<dyn StatObserver>>,
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("stats", &self.stats)
            .field("inventory", &self.inventory)
            .field("equipment", &self.equipment)
            .field("max_base_health", &self.max_base_health)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Character {
    /// Assemble a character from already-built parts
    pub fn with_parts(base: BaseStats, inventory: Inventory, equipment: EquipmentPanel) -> Self {
        Character {
            stats: StatBlock::new(base),
            inventory,
            equipment,
            max_base_health: base.health,
            observers: Vec::new(),
        }
    }

    /// A character with empty containers sized by `config`
    pub fn new(config: &CharacterConfig) -> Self {
        Self::with_parts(
            config.base_stats(),
            Inventory::new(config.inventory_size),
            EquipmentPanel::with_categories(&config.equipment_categories),
        )
    }

    /// A character with `config.starting_items` placed in the inventory
    pub fn from_config(catalog: &Catalog, config: &CharacterConfig) -> Self {
        let mut character = Self::new(config);
        let rejected = character
            .inventory
            .set_starting_items(catalog, &config.starting_items);
        if !rejected.is_empty() {
            log::warn!("{} starting items were not placed", rejected.len());
        }
        character
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn stat(&self, kind: StatKind) -> &StatValue {
        self.stats.get(kind)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn equipment(&self) -> &EquipmentPanel {
        &self.equipment
    }

    /// Register an observer for stat changes
    pub fn subscribe(&mut self, observer: impl StatObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Put a new item into the inventory; it is handed back if there is no room
    pub fn add_starting_item(&mut self, item: Item) -> Result<usize, Item> {
        self.inventory.add_item(item)
    }

    /// Move an item from the inventory into its equipment slot
    ///
    /// An item already in that slot goes back to the inventory and its
    /// modifiers are removed. If the inventory cannot take it, the whole
    /// equip is refused and nothing changes.
    pub fn equip(&mut self, instance: InstanceId) -> Result<(), LoadoutError> {
        let index = self
            .inventory
            .find(instance)
            .ok_or(LoadoutError::NotInInventory(instance))?;
        let category = self
            .inventory
            .slot(index)
            .and_then(Slot::item)
            .and_then(Item::category)
            .ok_or(LoadoutError::NotEquippable(instance))?;
        if self.equipment.slot(category).is_none() {
            log::debug!("equip {} refused: no {} slot", instance, category);
            return Err(LoadoutError::NoSlotForCategory(category));
        }

        let item = self
            .inventory
            .slot_mut(index)
            .and_then(Slot::take_one)
            .ok_or(LoadoutError::NotInInventory(instance))?;

        let previous = match self.equipment.add_item(item) {
            Ok(previous) => previous,
            Err(item) => {
                log::error!("equipment panel refused {} after slot check", instance);
                self.restore_inventory_unit(index, item);
                return Err(LoadoutError::NoSlotForCategory(category));
            }
        };

        let mut changed = Vec::new();
        if let Some(previous) = previous {
            let previous_id = previous.instance_id();
            if let Err(previous) = self.inventory.add_item(previous) {
                log::debug!(
                    "equip {} refused: no room for displaced {}",
                    instance,
                    previous_id
                );
                if let Some(item) = self.equipment.restore(category, previous) {
                    self.restore_inventory_unit(index, item);
                }
                return Err(LoadoutError::InventoryFull);
            }
            merge(&mut changed, self.stats.unequip(previous_id));
            log::debug!("{} displaced from {}", previous_id, category);
        }

        if let Some(item) = self.equipment.get(category) {
            merge(&mut changed, self.stats.equip(item));
        }
        log::debug!("equipped {} in {}", instance, category);
        self.notify(&changed);
        Ok(())
    }

    /// Move an equipped item back into the inventory
    ///
    /// Refused when the inventory has no empty slot.
    pub fn unequip(&mut self, instance: InstanceId) -> Result<(), LoadoutError> {
        if self.inventory.is_full() {
            log::debug!("unequip {} refused: inventory full", instance);
            return Err(LoadoutError::InventoryFull);
        }
        let category = self
            .equipment
            .find(instance)
            .ok_or(LoadoutError::NotEquipped(instance))?;
        let item = self
            .equipment
            .remove_item(instance)
            .ok_or(LoadoutError::NotEquipped(instance))?;

        let changed = self.stats.unequip(instance);
        if let Err(item) = self.inventory.add_item(item) {
            log::error!("inventory refused {} after fullness check", instance);
            self.equipment.restore(category, item);
            if let Some(item) = self.equipment.get(category) {
                self.stats.equip(item);
            }
            return Err(LoadoutError::InventoryFull);
        }

        log::debug!("unequipped {} from {}", instance, category);
        self.notify(&changed);
        Ok(())
    }

    /// Subtract damage from health's base value. Returns whether the character is still alive.
    ///
    /// Negative or non-finite damage is treated as zero.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        let damage = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        let was_alive = self.is_alive();
        if damage > 0.0 {
            self.stats.health.add_base_value(-damage);
            log::debug!("took {} damage", damage);
            self.notify(&[StatKind::Health]);
        }

        let alive = self.is_alive();
        if was_alive && !alive {
            log::info!("character died");
        }
        alive
    }

    /// Restore health's base value, up to the configured base
    pub fn heal(&mut self, amount: f64) {
        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        let base = self.stats.health.base_value();
        let healed = (base + amount).min(self.max_base_health.max(base));
        if healed != base {
            self.stats.health.set_base_value(healed);
            self.notify(&[StatKind::Health]);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.health.value() > 0.0
    }

    /// Display name of a held item, looked up by instance
    pub fn item_name(&self, instance: InstanceId) -> Option<&str> {
        self.find_item(instance).map(Item::name)
    }

    /// A held item, equipped or in the inventory
    pub fn find_item(&self, instance: InstanceId) -> Option<&Item> {
        let in_equipment = self
            .equipment
            .find(instance)
            .and_then(|c| self.equipment.get(c));
        in_equipment.or_else(|| {
            self.inventory
                .find(instance)
                .and_then(|i| self.inventory.slot(i))
                .and_then(Slot::item)
        })
    }

    pub fn stat_tooltip(&self, kind: StatKind) -> StatTooltip {
        StatTooltip::build(kind.name(), self.stat(kind), |id| self.item_name(id))
    }

    pub fn item_tooltip(&self, instance: InstanceId) -> Option<ItemTooltip> {
        self.find_item(instance).and_then(ItemTooltip::for_item)
    }

    fn restore_inventory_unit(&mut self, index: usize, item: Item) {
        match self.inventory.slot_mut(index) {
            Some(slot) => slot.restore_one(item),
            None => log::error!("inventory slot {} vanished during rollback", index),
        }
    }

    fn notify(&mut self, kinds: &[StatKind]) {
        for kind in kinds {
            let value = self.stats.get(*kind).value();
            for observer in &mut self.observers {
                observer.stat_changed(*kind, value);
            }
        }
    }
}

fn merge(into: &mut Vec<StatKind>, from: Vec<StatKind>) {
    for kind in from {
        if !into.contains(&kind) {
            into.push(kind);
        }
    }
}
