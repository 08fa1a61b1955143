//! loadout_core - Character stats driven by what a character carries and wears
//!
//! This library provides:
//! - StatValue: A base value plus ordered Flat / PercentAdd / PercentMult modifiers
//! - StatBlock: Melee damage, ranged damage and health for one character
//! - Item catalog: Shared templates with per-instance identity
//! - Inventory and EquipmentPanel: Slot containers with stacking and category rules
//! - Character: Equip, unequip and slot transfers that keep stats in sync

pub mod character;
pub mod config;
pub mod container;
pub mod error;
pub mod item;
pub mod prelude;
pub mod source;
pub mod stat_block;
pub mod tooltip;
pub mod types;

// Re-export core types for convenience
pub use character::{Character, SlotRef, StatObserver};
pub use config::{default_catalog, default_character, CharacterConfig, ConfigError};
pub use container::{EquipmentPanel, Inventory, ItemChest, Slot, SlotKind};
pub use error::LoadoutError;
pub use item::{Catalog, EquipmentBonuses, InstanceId, Item, ItemTemplate};
pub use source::ModifierSource;
pub use stat_block::{BaseStats, Modifier, ModifierHandle, ModifierKind, StatBlock, StatValue};
pub use tooltip::{ItemTooltip, StatTooltip};
pub use types::{EquipmentCategory, ItemId, StatKind};
