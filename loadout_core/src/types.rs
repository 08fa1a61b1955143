//! Core types shared across the stat and container layers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Equipment category an equippable item occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Helmet,
    Chest,
    Gloves,
    Boots,
    Weapon1,
    Weapon2,
    Accessory1,
    Accessory2,
}

impl EquipmentCategory {
    /// Get all equipment categories
    pub fn all() -> &'static [EquipmentCategory] {
        &[
            EquipmentCategory::Helmet,
            EquipmentCategory::Chest,
            EquipmentCategory::Gloves,
            EquipmentCategory::Boots,
            EquipmentCategory::Weapon1,
            EquipmentCategory::Weapon2,
            EquipmentCategory::Accessory1,
            EquipmentCategory::Accessory2,
        ]
    }

    /// Snake-case key used in config files and commands
    pub fn key(&self) -> &'static str {
        match self {
            EquipmentCategory::Helmet => "helmet",
            EquipmentCategory::Chest => "chest",
            EquipmentCategory::Gloves => "gloves",
            EquipmentCategory::Boots => "boots",
            EquipmentCategory::Weapon1 => "weapon1",
            EquipmentCategory::Weapon2 => "weapon2",
            EquipmentCategory::Accessory1 => "accessory1",
            EquipmentCategory::Accessory2 => "accessory2",
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EquipmentCategory::Helmet => "Helmet",
            EquipmentCategory::Chest => "Chest",
            EquipmentCategory::Gloves => "Gloves",
            EquipmentCategory::Boots => "Boots",
            EquipmentCategory::Weapon1 => "Weapon 1",
            EquipmentCategory::Weapon2 => "Weapon 2",
            EquipmentCategory::Accessory1 => "Accessory 1",
            EquipmentCategory::Accessory2 => "Accessory 2",
        };
        f.write_str(name)
    }
}

impl FromStr for EquipmentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        EquipmentCategory::all()
            .iter()
            .copied()
            .find(|c| c.key() == lowered)
            .ok_or_else(|| format!("unknown equipment category '{}'", s))
    }
}

/// The three derived character attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    MeleeDamage,
    RangedDamage,
    Health,
}

impl StatKind {
    /// Get all stat kinds, in display order
    pub fn all() -> &'static [StatKind] {
        &[StatKind::MeleeDamage, StatKind::RangedDamage, StatKind::Health]
    }

    /// Lowercase display name ("melee damage")
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::MeleeDamage => "melee damage",
            StatKind::RangedDamage => "ranged damage",
            StatKind::Health => "health",
        }
    }

    /// Title-case label used on item tooltips ("Melee Damage")
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::MeleeDamage => "Melee Damage",
            StatKind::RangedDamage => "Ranged Damage",
            StatKind::Health => "Health",
        }
    }
}

impl FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "melee" | "melee_damage" => Ok(StatKind::MeleeDamage),
            "ranged" | "ranged_damage" => Ok(StatKind::RangedDamage),
            "health" => Ok(StatKind::Health),
            other => Err(format!("unknown stat '{}'", other)),
        }
    }
}

/// Stable catalog identifier for an item template
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
