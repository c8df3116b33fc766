use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    SetInputText(String),
    SetSearchText(String),
    SetMessage(String),
    /// Restore input, committed term and message to empty.
    ResetMovies,
}

impl Intent for SearchIntent {}
