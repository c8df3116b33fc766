//! UI state and view bindings.
//!
//! Markup is out of scope; views are modelled as plain values so the
//! rendering policy can be exercised directly.

pub mod movie_item;
pub mod movie_list;
pub mod mvi;
pub mod routes;
pub mod search;
pub mod search_bar;

pub use movie_item::{MovieItem, PosterImage, POSTER_HEIGHT, POSTER_WIDTH};
pub use movie_list::MovieList;
pub use routes::{Navigator, Route};
pub use search::{SearchIntent, SearchReducer, SearchState, SearchStore};
pub use search_bar::{SearchBar, SEARCH_LABEL};
