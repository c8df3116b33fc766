//! Search state feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Input text, committed term, status message
//! - `intent.rs` - Keystroke, submit, message, reset
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `store.rs` - Shared, subscribable container that dispatches intents

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::SearchState;
pub use store::SearchStore;
