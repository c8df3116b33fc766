use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::reducer::SearchReducer;
use crate::ui::search::state::SearchState;

/// Injectable container for [`SearchState`].
///
/// Clones share the same state. Every mutation goes through
/// [`SearchReducer`] and is visible to readers as soon as the call returns.
/// Subscribers are woken only when the state actually changes.
#[derive(Clone)]
pub struct SearchStore {
    tx: Arc<watch::Sender<SearchState>>,
    /// Bumped on every commit or reset, including a re-commit of the same term.
    commits: Arc<AtomicU64>,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::with_state(SearchState::default())
    }

    /// Store seeded with `state`, for tests and restored sessions.
    pub fn with_state(state: SearchState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx: Arc::new(tx),
            commits: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn dispatch(&self, intent: SearchIntent) {
        self.tx.send_if_modified(|state| {
            let next = SearchReducer::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }

    pub fn set_input_text(&self, text: impl Into<String>) {
        self.dispatch(SearchIntent::SetInputText(text.into()));
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(search_text = %text, "Search committed");
        self.commits.fetch_add(1, Ordering::SeqCst);
        self.dispatch(SearchIntent::SetSearchText(text));
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.dispatch(SearchIntent::SetMessage(message.into()));
    }

    pub fn reset_movies(&self) {
        self.commits.fetch_add(1, Ordering::SeqCst);
        self.dispatch(SearchIntent::ResetMovies);
    }

    /// Number of commits and resets so far.
    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::SeqCst)
    }

    /// Set `message` only while `search_text` is still the committed term.
    ///
    /// The check and the write happen under one lock, so a result for an
    /// abandoned term can never overwrite the message of a newer one.
    /// Returns whether the message was applied.
    pub fn set_message_if_current(&self, search_text: &str, message: impl Into<String>) -> bool {
        let message = message.into();
        let mut applied = false;
        self.tx.send_if_modified(|state| {
            if state.search_text != search_text {
                return false;
            }
            applied = true;
            let next = SearchReducer::reduce(state.clone(), SearchIntent::SetMessage(message));
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
        applied
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> SearchState {
        self.tx.borrow().clone()
    }

    /// Read a projection of the current state.
    ///
    /// `f` runs under the store's read lock and must not mutate the store.
    pub fn select<T>(&self, f: impl FnOnce(&SearchState) -> T) -> T {
        f(&self.tx.borrow())
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.tx.subscribe()
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}
