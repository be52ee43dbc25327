//! In-memory store
//!
//! Applies actions through the application reducer and then notifies
//! subscribers. The subscriber list is locked before the state guard is
//! released, so subscribers observe actions in the order they were applied.
//! Subscribers may read `state()` but must not call `dispatch` or `subscribe`.

use std::sync::{Mutex, PoisonError, RwLock};

use rostering_client_app::application::ports::outbound::StorePort;
use rostering_client_app::application::store::{AppAction, AppState};

type Subscriber = Box<dyn Fn(&AppAction, &AppState) + Send + Sync + 'static>;

#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<AppState>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: RwLock::new(state),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a callback invoked after every dispatch with the action and
    /// the resulting state.
    pub fn subscribe(&self, callback: impl Fn(&AppAction, &AppState) + Send + Sync + 'static) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(callback));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl StorePort for InMemoryStore {
    fn dispatch(&self, action: AppAction) {
        tracing::debug!(?action, "Dispatching action");

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.apply(&action);
        let snapshot = state.clone();

        // Lock order: state, then subscribers
        let subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        drop(state);

        for subscriber in subscribers.iter() {
            subscriber(&action, &snapshot);
        }
    }

    fn state(&self) -> AppState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
