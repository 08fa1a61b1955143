//! Gear - Modifiers contributed by an equipped item instance

use crate::item::{EquipmentBonuses, InstanceId, Item};
use crate::source::ModifierSource;
use crate::stat_block::Modifier;
use crate::types::StatKind;

impl EquipmentBonuses {
    /// One modifier per non-zero bonus: flat bonuses as Flat, percent bonuses as PercentMult
    pub fn to_modifiers(&self) -> Vec<(StatKind, Modifier)> {
        let flats = [
            (StatKind::MeleeDamage, self.melee_flat),
            (StatKind::RangedDamage, self.ranged_flat),
            (StatKind::Health, self.health_flat),
        ];
        let percents = [
            (StatKind::MeleeDamage, self.melee_percent),
            (StatKind::RangedDamage, self.ranged_percent),
            (StatKind::Health, self.health_percent),
        ];

        let mut modifiers = Vec::new();
        for (kind, value) in flats {
            if value != 0 {
                modifiers.push((kind, Modifier::flat(value as f64)));
            }
        }
        for (kind, value) in percents {
            if value != 0.0 {
                modifiers.push((kind, Modifier::percent_mult(value)));
            }
        }
        modifiers
    }
}

impl ModifierSource for Item {
    fn source_id(&self) -> InstanceId {
        self.instance_id()
    }

    fn modifiers(&self) -> Vec<(StatKind, Modifier)> {
        self.equipment()
            .map(EquipmentBonuses::to_modifiers)
            .unwrap_or_default()
    }
}
