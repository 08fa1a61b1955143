//! Storage containers: slots, the inventory, the equipment panel and chests

mod chest;
mod equipment;
mod inventory;
mod slot;

pub use chest::ItemChest;
pub use equipment::EquipmentPanel;
pub use inventory::Inventory;
pub use slot::{Slot, SlotKind};
