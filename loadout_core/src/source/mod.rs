//! ModifierSource - Trait for anything that contributes modifiers to a StatBlock

mod gear;

use crate::item::InstanceId;
use crate::stat_block::Modifier;
use crate::types::StatKind;

/// Something that binds modifiers to stats while it is equipped
///
/// Every modifier a source yields is tagged with `source_id()` when bound,
/// so unbinding removes exactly what one bind added.
pub trait ModifierSource {
    /// Identity the bound modifiers are keyed by
    fn source_id(&self) -> InstanceId;

    /// Modifiers to add, and the stat each one targets
    fn modifiers(&self) -> Vec<(StatKind, Modifier)>;
}
