//! Navigable routes of the movie search UI.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/movies/:imdbID`
    Detail(String),
    /// `/poster/:imdbID`
    Poster(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/movies/{}", id),
            Route::Poster(id) => format!("/poster/{}", id),
        }
    }

    /// Parse a path; `None` for anything that is not a known route.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::List);
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["movies", id] if !id.is_empty() => Some(Route::Detail(id.to_string())),
            ["poster", id] if !id.is_empty() => Some(Route::Poster(id.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Programmatic navigation, e.g. a browser router.
pub trait Navigator {
    fn push(&self, route: Route);
}
