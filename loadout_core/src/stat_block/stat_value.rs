//! StatValue - A base value plus an ordered modifier list with a lazy cache

use super::modifier::{Modifier, ModifierKind};
use crate::item::InstanceId;
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

/// Decimal places kept in a computed value
const ROUNDING_PLACES: i32 = 4;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Handle returned by [`StatValue::add_modifier`], used to remove that exact entry
///
/// Handles are unique across every stat in the process, so a handle from one
/// stat never matches an entry in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModifierHandle(u64);

impl ModifierHandle {
    fn fresh() -> Self {
        ModifierHandle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

/// A stat derived from a base value and an ordered set of modifiers
///
/// Modifiers are kept sorted by `order`. Entries with equal `order` keep
/// their insertion sequence, so recomputation is deterministic.
///
/// Final value is computed left to right over the sorted list:
/// - `Flat`: `total += value`
/// - `PercentAdd`: consecutive entries are summed, then `total *= 1 + sum`
/// - `PercentMult`: `total *= 1 + value`
///
/// and rounded to 4 decimal places.
#[derive(Debug, Clone)]
pub struct StatValue {
    base: f64,
    modifiers: Vec<(ModifierHandle, Modifier)>,
    cached: Cell<f64>,
    dirty: Cell<bool>,
}

impl Default for StatValue {
    fn default() -> Self {
        Self::with_base(0.0)
    }
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: f64) -> Self {
        StatValue {
            base,
            modifiers: Vec::new(),
            cached: Cell::new(0.0),
            dirty: Cell::new(true),
        }
    }

    pub fn base_value(&self) -> f64 {
        self.base
    }

    /// Replace the base value
    pub fn set_base_value(&mut self, base: f64) {
        if self.base != base {
            self.base = base;
            self.dirty.set(true);
        }
    }

    /// Shift the base value by `delta`
    pub fn add_base_value(&mut self, delta: f64) {
        self.set_base_value(self.base + delta);
    }

    /// Modifiers in application order
    pub fn modifiers(&self) -> impl Iterator<Item = &Modifier> + '_ {
        self.modifiers.iter().map(|(_, m)| m)
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    /// Whether the next read of [`value`](Self::value) will recompute
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Insert a modifier after every existing entry with `order <= modifier.order`
    pub fn add_modifier(&mut self, modifier: Modifier) -> ModifierHandle {
        let handle = ModifierHandle::fresh();

        let index = self
            .modifiers
            .partition_point(|(_, existing)| existing.order() <= modifier.order());
        self.modifiers.insert(index, (handle, modifier));
        self.dirty.set(true);
        handle
    }

    /// Remove one modifier by handle. Returns true if it was present.
    pub fn remove_modifier(&mut self, handle: ModifierHandle) -> bool {
        match self.modifiers.iter().position(|(h, _)| *h == handle) {
            Some(index) => {
                self.modifiers.remove(index);
                self.dirty.set(true);
                true
            }
            None => false,
        }
    }

    /// Remove every modifier contributed by `source`. Returns true if any were removed.
    pub fn remove_all_from_source(&mut self, source: InstanceId) -> bool {
        let before = self.modifiers.len();
        self.modifiers.retain(|(_, m)| !m.is_from(source));
        let removed = self.modifiers.len() != before;
        if removed {
            self.dirty.set(true);
        }
        removed
    }

    /// Check whether any modifier came from `source`
    pub fn has_modifiers_from(&self, source: InstanceId) -> bool {
        self.modifiers.iter().any(|(_, m)| m.is_from(source))
    }

    /// Cached final value, recomputed on first read after a change
    pub fn value(&self) -> f64 {
        if self.dirty.get() {
            self.cached.set(self.compute());
            self.dirty.set(false);
        }
        self.cached.get()
    }

    /// Final value computed from scratch, ignoring the cache
    pub fn compute(&self) -> f64 {
        let mut total = self.base;
        let mut percent_add_sum = 0.0;

        let mut iter = self.modifiers.iter().map(|(_, m)| m).peekable();
        while let Some(modifier) = iter.next() {
            match modifier.kind() {
                ModifierKind::Flat => total += modifier.value(),
                ModifierKind::PercentAdd => {
                    percent_add_sum += modifier.value();
                    let group_continues = iter
                        .peek()
                        .is_some_and(|next| next.kind() == ModifierKind::PercentAdd);
                    if !group_continues {
                        total *= 1.0 + percent_add_sum;
                        percent_add_sum = 0.0;
                    }
                }
                ModifierKind::PercentMult => total *= 1.0 + modifier.value(),
            }
        }

        round_to_places(total, ROUNDING_PLACES)
    }

    /// Difference between the final value and the base, rounded like the value
    pub fn bonus(&self) -> f64 {
        round_to_places(self.value() - self.base, ROUNDING_PLACES)
    }
}

/// Decimal rounding with ties to even
pub(crate) fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}
