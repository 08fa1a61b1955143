//! Change notification for presentation layers

use crate::types::StatKind;

/// Receives a stat's new value after a committed change
pub trait StatObserver {
    fn stat_changed(&mut self, kind: StatKind, value: f64);
}

impl<F> StatObserver for F
where
    F: FnMut(StatKind, f64),
{
    fn stat_changed(&mut self, kind: StatKind, value: f64) {
        self(kind, value)
    }
}
