use crate::query::QueryResult;
use crate::ui::movie_item::MovieItem;

/// What the result area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieList {
    Movies(Vec<MovieItem>),
    /// No results and a status message is set.
    Message(String),
    Empty,
}

impl MovieList {
    /// The message is shown only when there is no data to show.
    pub fn from_query(result: &QueryResult, message: &str) -> Self {
        match result.data.as_deref() {
            Some(movies) if !movies.is_empty() => {
                MovieList::Movies(movies.iter().map(MovieItem::new).collect())
            }
            _ if !message.is_empty() => MovieList::Message(message.to_string()),
            _ => MovieList::Empty,
        }
    }
}
