//! Unidirectional state primitives behind the search store.
//!
//! ```text
//! keystroke / submit / reset / settled query
//!        │
//!        ▼
//!     Intent ──→ Reducer ──→ State ──→ SearchBar / MovieList
//! ```
//!
//! Reducers are pure; side effects (fetching, navigation) live in the
//! query cache and the view bindings.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
