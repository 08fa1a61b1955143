//! StatBlock - The three character stats and their equip/unequip bonds

mod modifier;
mod stat_value;

pub use modifier::{Modifier, ModifierKind};
pub use stat_value::{ModifierHandle, StatValue};

pub(crate) use stat_value::round_to_places;

use crate::item::InstanceId;
use crate::source::ModifierSource;
use crate::types::StatKind;

/// Base values for a fresh StatBlock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStats {
    pub melee_damage: f64,
    pub ranged_damage: f64,
    pub health: f64,
}

impl Default for BaseStats {
    fn default() -> Self {
        BaseStats {
            melee_damage: 10.0,
            ranged_damage: 10.0,
            health: 100.0,
        }
    }
}

/// Melee damage, ranged damage and health for one character
#[derive(Debug, Clone, Default)]
pub struct StatBlock {
    pub melee_damage: StatValue,
    pub ranged_damage: StatValue,
    pub health: StatValue,
}

impl StatBlock {
    pub fn new(base: BaseStats) -> Self {
        StatBlock {
            melee_damage: StatValue::with_base(base.melee_damage),
            ranged_damage: StatValue::with_base(base.ranged_damage),
            health: StatValue::with_base(base.health),
        }
    }

    pub fn get(&self, kind: StatKind) -> &StatValue {
        match kind {
            StatKind::MeleeDamage => &self.melee_damage,
            StatKind::RangedDamage => &self.ranged_damage,
            StatKind::Health => &self.health,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut StatValue {
        match kind {
            StatKind::MeleeDamage => &mut self.melee_damage,
            StatKind::RangedDamage => &mut self.ranged_damage,
            StatKind::Health => &mut self.health,
        }
    }

    /// Bind a source's modifiers, returning the stats that changed
    ///
    /// Not idempotent: equipping the same source twice duplicates its
    /// modifiers. Callers guard against that through slot occupancy.
    pub fn equip(&mut self, source: &dyn ModifierSource) -> Vec<StatKind> {
        let source_id = source.source_id();
        let mut changed = Vec::new();
        for (kind, modifier) in source.modifiers() {
            self.get_mut(kind).add_modifier(modifier.with_source(source_id));
            if !changed.contains(&kind) {
                changed.push(kind);
            }
        }
        changed
    }

    /// Drop every modifier a source contributed, returning the stats that changed
    pub fn unequip(&mut self, source: InstanceId) -> Vec<StatKind> {
        StatKind::all()
            .iter()
            .copied()
            .filter(|kind| self.get_mut(*kind).remove_all_from_source(source))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{EquipmentBonuses, Item, ItemTemplate};
    use crate::types::EquipmentCategory;
    use proptest::prelude::*;

    fn ring(bonuses: EquipmentBonuses) -> Item {
        Item::new(ItemTemplate::equippable("ring", "Ring", bonuses))
    }

    #[test]
    fn test_equip_adds_only_non_zero_bonuses() {
        let mut stats = StatBlock::new(BaseStats::default());
        let item = ring(EquipmentBonuses {
            melee_flat: 5,
            health_percent: 0.10,
            ..EquipmentBonuses::new(EquipmentCategory::Accessory1)
        });

        let changed = stats.equip(&item);
        assert_eq!(changed, vec![StatKind::MeleeDamage, StatKind::Health]);
        assert_eq!(stats.melee_damage.value(), 15.0);
        assert_eq!(stats.ranged_damage.modifier_count(), 0);
        assert_eq!(stats.health.value(), 110.0);
        assert!(stats
            .health
            .modifiers()
            .all(|m| m.kind() == ModifierKind::PercentMult && m.is_from(item.instance_id())));
    }

    #[test]
    fn test_unequip_removes_only_that_instance() {
        let mut stats = StatBlock::new(BaseStats::default());
        let bonuses = EquipmentBonuses {
            melee_flat: 3,
            melee_percent: 0.5,
            ..EquipmentBonuses::new(EquipmentCategory::Accessory1)
        };
        let first = ring(bonuses);
        let second = first.split();

        stats.equip(&first);
        stats.equip(&second);
        assert_eq!(stats.melee_damage.modifier_count(), 4);

        assert_eq!(stats.unequip(first.instance_id()), vec![StatKind::MeleeDamage]);
        assert_eq!(stats.melee_damage.modifier_count(), 2);
        assert!(stats.melee_damage.has_modifiers_from(second.instance_id()));
        assert_eq!(stats.melee_damage.value(), 19.5);
    }

    #[test]
    fn test_unequip_without_contribution_is_noop() {
        let mut stats = StatBlock::new(BaseStats::default());
        assert!(stats.unequip(InstanceId::from_raw(7)).is_empty());
    }

    proptest! {
        #[test]
        fn prop_equip_then_unequip_restores_values(
            melee_flat in -20i32..20,
            ranged_flat in -20i32..20,
            health_flat in -50i32..50,
            melee_percent in -0.9f64..2.0,
            ranged_percent in -0.9f64..2.0,
            health_percent in -0.9f64..2.0,
        ) {
            let mut stats = StatBlock::new(BaseStats::default());
            let before: Vec<f64> = StatKind::all().iter().map(|k| stats.get(*k).value()).collect();

            let item = ring(EquipmentBonuses {
                melee_flat,
                ranged_flat,
                health_flat,
                melee_percent,
                ranged_percent,
                health_percent,
                ..EquipmentBonuses::new(EquipmentCategory::Helmet)
            });
            stats.equip(&item);
            stats.unequip(item.instance_id());

            let after: Vec<f64> = StatKind::all().iter().map(|k| stats.get(*k).value()).collect();
            prop_assert_eq!(before, after);
            for kind in StatKind::all() {
                prop_assert_eq!(stats.get(*kind).modifier_count(), 0);
            }
        }
    }
}
