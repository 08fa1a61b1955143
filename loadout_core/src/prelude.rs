//! Prelude module for convenient imports
//!
//! ```rust
//! use loadout_core::prelude::*;
//! ```

// Stats
pub use crate::stat_block::{Modifier, ModifierKind, StatBlock, StatValue};
pub use crate::types::{EquipmentCategory, ItemId, StatKind};

// Items and containers
pub use crate::container::{EquipmentPanel, Inventory, ItemChest};
pub use crate::item::{Catalog, InstanceId, Item};

// Character
pub use crate::character::{Character, SlotRef};
pub use crate::error::LoadoutError;

// Config
pub use crate::config::{default_catalog, default_character};
