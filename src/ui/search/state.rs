use crate::ui::mvi::UiState;

/// Session-wide search state.
///
/// `input_text` and `search_text` are independent: typing never commits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Raw, uncommitted keystrokes.
    pub input_text: String,
    /// Committed query term; the query cache key.
    pub search_text: String,
    /// Status or error text shown when no results are displayed.
    pub message: String,
}

impl UiState for SearchState {}

impl SearchState {
    /// Whether the committed term would trigger a remote fetch.
    pub fn has_query(&self) -> bool {
        !self.search_text.trim().is_empty()
    }
}
