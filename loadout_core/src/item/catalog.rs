//! Catalog - Read-only table of item templates

use super::{Item, ItemTemplate, MAX_STACK_LIMIT};
use crate::config::ConfigError;
use crate::types::ItemId;
use std::collections::HashMap;
use std::sync::Arc;

/// Item template registry
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: HashMap<ItemId, Arc<ItemTemplate>>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Catalog {
            templates: HashMap::new(),
        }
    }

    /// Build a catalog, rejecting invalid or duplicate templates
    pub fn from_templates(templates: Vec<ItemTemplate>) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        for template in templates {
            catalog.register(template)?;
        }
        Ok(catalog)
    }

    /// Register a template
    pub fn register(&mut self, template: ItemTemplate) -> Result<(), ConfigError> {
        validate_template(&template)?;
        if self.templates.contains_key(&template.id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate item id '{}'",
                template.id
            )));
        }
        self.templates.insert(template.id.clone(), Arc::new(template));
        Ok(())
    }

    /// Get a template by ID
    pub fn get(&self, id: &ItemId) -> Option<&ItemTemplate> {
        self.templates.get(id).map(|t| t.as_ref())
    }

    /// Create a fresh instance of a template
    pub fn instantiate(&self, id: &ItemId) -> Option<Item> {
        self.templates.get(id).map(|t| Item::from_shared(Arc::clone(t)))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template IDs in sorted order
    pub fn ids(&self) -> Vec<&ItemId> {
        let mut ids: Vec<_> = self.templates.keys().collect();
        ids.sort();
        ids
    }
}

fn validate_template(template: &ItemTemplate) -> Result<(), ConfigError> {
    if template.id.as_str().trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "item '{}' has an empty id",
            template.name
        )));
    }
    if !(1..=MAX_STACK_LIMIT).contains(&template.max_stack) {
        return Err(ConfigError::ValidationError(format!(
            "item '{}' max_stack {} outside 1..={}",
            template.id, template.max_stack, MAX_STACK_LIMIT
        )));
    }
    if let Some(bonuses) = &template.equipment {
        let percents = [
            ("melee_percent", bonuses.melee_percent),
            ("ranged_percent", bonuses.ranged_percent),
            ("health_percent", bonuses.health_percent),
        ];
        for (field, value) in percents {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "item '{}' {} must be finite, got {}",
                    template.id, field, value
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::EquipmentBonuses;
    use crate::types::EquipmentCategory;

    #[test]
    fn test_instantiate_gives_fresh_instances() {
        let catalog = Catalog::from_templates(vec![ItemTemplate::new("arrow", "Arrow").with_max_stack(20)])
            .unwrap();
        let id = ItemId::from("arrow");
        let a = catalog.instantiate(&id).unwrap();
        let b = catalog.instantiate(&id).unwrap();
        assert_ne!(a.instance_id(), b.instance_id());
        assert!(catalog.instantiate(&ItemId::from("missing")).is_none());
    }

    #[test]
    fn test_rejects_duplicates_and_bad_stacks() {
        let dup = Catalog::from_templates(vec![
            ItemTemplate::new("arrow", "Arrow"),
            ItemTemplate::new("arrow", "Other Arrow"),
        ]);
        assert!(matches!(dup, Err(ConfigError::ValidationError(_))));

        let zero = Catalog::from_templates(vec![ItemTemplate::new("arrow", "Arrow").with_max_stack(0)]);
        assert!(zero.is_err());

        let huge = Catalog::from_templates(vec![ItemTemplate::new("arrow", "Arrow").with_max_stack(1000)]);
        assert!(huge.is_err());

        let blank = Catalog::from_templates(vec![ItemTemplate::new(" ", "Nothing")]);
        assert!(blank.is_err());
    }

    #[test]
    fn test_rejects_non_finite_bonus() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let cursed = ItemTemplate::equippable(
                "cursed_crown",
                "Cursed Crown",
                EquipmentBonuses {
                    health_percent: value,
                    ..EquipmentBonuses::new(EquipmentCategory::Helmet)
                },
            );
            let result = Catalog::from_templates(vec![cursed]);
            assert!(matches!(result, Err(ConfigError::ValidationError(_))));
        }
    }

    #[test]
    fn test_rejects_nan_bonus_from_toml() {
        let toml = r#"
[[items]]
id = "cursed_crown"
name = "Cursed Crown"

[items.equipment]
category = "helmet"
health_percent = nan
"#;
        let result = crate::config::parse_catalog(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
