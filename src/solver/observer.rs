//! Hook for watching moves as the solver applies them.

use crate::core::{MoveRecord, PegState};

/// Receives every move right after it has been applied.
///
/// `state` is the configuration after the move. Any `FnMut(&MoveRecord,
/// &PegState)` closure is an observer.
pub trait MoveObserver {
    fn on_move(&mut self, record: &MoveRecord, state: &PegState);
}

impl<F> MoveObserver for F
where
    F: FnMut(&MoveRecord, &PegState),
{
    fn on_move(&mut self, record: &MoveRecord, state: &PegState) {
        self(record, state);
    }
}
