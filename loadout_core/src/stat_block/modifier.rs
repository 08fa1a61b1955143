//! Modifier - A single immutable adjustment to a stat

use crate::item::InstanceId;

/// How a modifier combines with the running total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    /// Added directly to the total
    Flat,
    /// Summed with adjacent PercentAdd modifiers, then multiplied in once
    PercentAdd,
    /// Multiplied into the total on its own
    PercentMult,
}

impl ModifierKind {
    /// Default ordering key, so Flat < PercentAdd < PercentMult
    pub fn default_order(&self) -> i32 {
        match self {
            ModifierKind::Flat => 100,
            ModifierKind::PercentAdd => 200,
            ModifierKind::PercentMult => 300,
        }
    }
}

/// An immutable numeric effect on a stat
///
/// Percent values are decimals (0.10 = 10%). `source` is a back-reference
/// key to the item instance that contributed the modifier, never an owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifier {
    value: f64,
    kind: ModifierKind,
    order: i32,
    source: Option<InstanceId>,
}

impl Modifier {
    /// Create a modifier with the kind's default order and no source
    pub fn new(value: f64, kind: ModifierKind) -> Self {
        Modifier {
            value,
            kind,
            order: kind.default_order(),
            source: None,
        }
    }

    /// Flat modifier shorthand
    pub fn flat(value: f64) -> Self {
        Self::new(value, ModifierKind::Flat)
    }

    /// PercentAdd modifier shorthand
    pub fn percent_add(value: f64) -> Self {
        Self::new(value, ModifierKind::PercentAdd)
    }

    /// PercentMult modifier shorthand
    pub fn percent_mult(value: f64) -> Self {
        Self::new(value, ModifierKind::PercentMult)
    }

    /// Override the ordering key
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Tag the modifier with the instance that owns it
    pub fn with_source(mut self, source: InstanceId) -> Self {
        self.source = Some(source);
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn source(&self) -> Option<InstanceId> {
        self.source
    }

    /// Check whether this modifier came from the given source
    pub fn is_from(&self, source: InstanceId) -> bool {
        self.source == Some(source)
    }
}
