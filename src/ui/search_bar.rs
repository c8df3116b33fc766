use crate::ui::search::SearchStore;

pub const SEARCH_LABEL: &str = "Search";

/// Input field plus Search / Reset buttons.
pub struct SearchBar {
    store: SearchStore,
}

impl SearchBar {
    pub fn new(store: SearchStore) -> Self {
        Self { store }
    }

    /// Current value of the input field.
    pub fn input_text(&self) -> String {
        self.store.select(|s| s.input_text.clone())
    }

    pub fn on_input(&self, text: impl Into<String>) {
        self.store.set_input_text(text);
    }

    /// Commit the current input as the search term.
    pub fn on_submit(&self) {
        let input = self.input_text();
        self.store.set_search_text(input);
    }

    pub fn on_reset(&self) {
        self.store.reset_movies();
    }

    /// Search button text; `None` means a spinner is shown instead.
    pub fn search_label(&self, is_fetching: bool) -> Option<&'static str> {
        if is_fetching {
            None
        } else {
            Some(SEARCH_LABEL)
        }
    }
}
