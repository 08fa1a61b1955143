//! Reasons a character transaction can be refused

use crate::item::InstanceId;
use crate::types::EquipmentCategory;
use thiserror::Error;

/// A refused equip, unequip or transfer. State is unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadoutError {
    #[error("item {0} is not in the inventory")]
    NotInInventory(InstanceId),
    #[error("item {0} is not equipped")]
    NotEquipped(InstanceId),
    #[error("item {0} is not equippable")]
    NotEquippable(InstanceId),
    #[error("no equipment slot for category {0}")]
    NoSlotForCategory(EquipmentCategory),
    #[error("inventory is full")]
    InventoryFull,
    #[error("slot does not exist")]
    UnknownSlot,
    #[error("slots cannot receive each other's items")]
    TransferRejected,
    #[error("moving items between two equipment slots is not supported")]
    UnsupportedTransfer,
}
