//! Character setup configuration

use super::ConfigError;
use crate::stat_block::BaseStats;
use crate::types::{EquipmentCategory, ItemId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base stats, container sizes and starting items for a new character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterConfig {
    #[serde(default = "default_melee_damage")]
    pub melee_damage: f64,
    #[serde(default = "default_ranged_damage")]
    pub ranged_damage: f64,
    #[serde(default = "default_health")]
    pub health: f64,
    #[serde(default = "default_inventory_size")]
    pub inventory_size: usize,
    #[serde(default = "default_equipment_categories")]
    pub equipment_categories: Vec<EquipmentCategory>,
    /// Catalog IDs placed in the inventory at setup
    #[serde(default)]
    pub starting_items: Vec<ItemId>,
}

fn default_melee_damage() -> f64 {
    BaseStats::default().melee_damage
}

fn default_ranged_damage() -> f64 {
    BaseStats::default().ranged_damage
}

fn default_health() -> f64 {
    BaseStats::default().health
}

fn default_inventory_size() -> usize {
    20
}

fn default_equipment_categories() -> Vec<EquipmentCategory> {
    EquipmentCategory::all().to_vec()
}

impl Default for CharacterConfig {
    fn default() -> Self {
        CharacterConfig {
            melee_damage: default_melee_damage(),
            ranged_damage: default_ranged_damage(),
            health: default_health(),
            inventory_size: default_inventory_size(),
            equipment_categories: default_equipment_categories(),
            starting_items: Vec::new(),
        }
    }
}

impl CharacterConfig {
    pub fn base_stats(&self) -> BaseStats {
        BaseStats {
            melee_damage: self.melee_damage,
            ranged_damage: self.ranged_damage,
            health: self.health,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory_size == 0 {
            return Err(ConfigError::ValidationError(
                "inventory_size must be at least 1".to_string(),
            ));
        }
        let stats = [
            ("melee_damage", self.melee_damage),
            ("ranged_damage", self.ranged_damage),
            ("health", self.health),
        ];
        for (name, value) in stats {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a finite number",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Load a character config from a TOML or JSON file (chosen by extension)
pub fn load_character(path: &Path) -> Result<CharacterConfig, ConfigError> {
    let config: CharacterConfig = super::load_any(path)?;
    config.validate()?;
    Ok(config)
}

/// Load a character config from a TOML string
pub fn parse_character(content: &str) -> Result<CharacterConfig, ConfigError> {
    let config: CharacterConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the bundled character config
pub fn default_character() -> CharacterConfig {
    let toml = include_str!("../../config/character.toml");
    parse_character(toml).unwrap_or_else(|e| {
        log::error!("bundled character config is invalid: {}", e);
        CharacterConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_character("health = 250.0").unwrap();
        assert_eq!(config.health, 250.0);
        assert_eq!(config.melee_damage, 10.0);
        assert_eq!(config.inventory_size, 20);
        assert_eq!(config.equipment_categories.len(), 8);
        assert!(config.starting_items.is_empty());
    }

    #[test]
    fn test_zero_inventory_rejected() {
        let result = parse_character("inventory_size = 0");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_default_character_loads() {
        let config = default_character();
        assert_eq!(config.inventory_size, 12);
        assert_eq!(config.ranged_damage, 8.0);
        assert_eq!(config.starting_items.len(), 9);
    }
}
