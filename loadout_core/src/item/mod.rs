//! Item templates, item instances and instance identity

mod catalog;

pub use catalog::Catalog;

use crate::types::{EquipmentCategory, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Largest stack size a template may declare
pub const MAX_STACK_LIMIT: u32 = 999;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one item instance
///
/// Modifiers reference their contributing instance through this key, so
/// two instances of the same template never share modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Mint an identity no other live instance has
    pub fn fresh() -> Self {
        InstanceId(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap an externally assigned identity
    pub fn from_raw(raw: u64) -> Self {
        InstanceId(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-stat bonuses of an equippable template
///
/// Flat bonuses are whole numbers; percent bonuses are decimals (0.10 = 10%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquipmentBonuses {
    pub category: EquipmentCategory,
    #[serde(default)]
    pub melee_flat: i32,
    #[serde(default)]
    pub ranged_flat: i32,
    #[serde(default)]
    pub health_flat: i32,
    #[serde(default)]
    pub melee_percent: f64,
    #[serde(default)]
    pub ranged_percent: f64,
    #[serde(default)]
    pub health_percent: f64,
}

impl EquipmentBonuses {
    /// All-zero bonuses for a category
    pub fn new(category: EquipmentCategory) -> Self {
        EquipmentBonuses {
            category,
            melee_flat: 0,
            ranged_flat: 0,
            health_flat: 0,
            melee_percent: 0.0,
            ranged_percent: 0.0,
            health_percent: 0.0,
        }
    }
}

fn default_max_stack() -> u32 {
    1
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// Present only for equippable items
    #[serde(default)]
    pub equipment: Option<EquipmentBonuses>,
}

impl ItemTemplate {
    /// A plain, non-stacking item
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        ItemTemplate {
            id: id.into(),
            name: name.into(),
            icon: None,
            max_stack: default_max_stack(),
            equipment: None,
        }
    }

    /// An equippable, non-stacking item
    pub fn equippable(id: impl Into<ItemId>, name: impl Into<String>, bonuses: EquipmentBonuses) -> Self {
        ItemTemplate {
            equipment: Some(bonuses),
            ..Self::new(id, name)
        }
    }

    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// One concrete item with its own identity
///
/// Not `Clone`: copying an item must go through [`Item::split`] so the copy
/// gets a fresh [`InstanceId`].
#[derive(Debug)]
pub struct Item {
    instance: InstanceId,
    template: Arc<ItemTemplate>,
}

impl Item {
    /// Instantiate a template with a fresh identity
    pub fn new(template: ItemTemplate) -> Self {
        Self::from_shared(Arc::new(template))
    }

    /// Instantiate a shared template with a fresh identity
    pub fn from_shared(template: Arc<ItemTemplate>) -> Self {
        Item {
            instance: InstanceId::fresh(),
            template,
        }
    }

    /// Another instance of the same template
    pub fn split(&self) -> Item {
        Self::from_shared(Arc::clone(&self.template))
    }

    pub fn instance_id(&self) -> InstanceId {
        self.instance
    }

    pub fn id(&self) -> &ItemId {
        &self.template.id
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn icon(&self) -> Option<&str> {
        self.template.icon.as_deref()
    }

    pub fn max_stack(&self) -> u32 {
        self.template.max_stack
    }

    pub fn template(&self) -> &ItemTemplate {
        &self.template
    }

    pub fn equipment(&self) -> Option<&EquipmentBonuses> {
        self.template.equipment.as_ref()
    }

    pub fn category(&self) -> Option<EquipmentCategory> {
        self.equipment().map(|e| e.category)
    }

    pub fn is_equippable(&self) -> bool {
        self.template.equipment.is_some()
    }
}
