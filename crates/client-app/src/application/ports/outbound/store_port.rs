//! Store Port - the state container services dispatch into

use crate::application::store::{AppAction, AppState};

/// A shared, mutable state container written only through `dispatch`.
///
/// Implementations apply actions in the order they are dispatched; there is no
/// transaction or conflict detection, so concurrent writers are last-writer-wins.
pub trait StorePort: Send + Sync {
    fn dispatch(&self, action: AppAction);

    /// Snapshot of the current state
    fn state(&self) -> AppState;
}
