use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::SetInputText(input_text) => SearchState { input_text, ..state },
            SearchIntent::SetSearchText(search_text) => SearchState {
                search_text,
                ..state
            },
            SearchIntent::SetMessage(message) => SearchState { message, ..state },
            SearchIntent::ResetMovies => SearchState::default(),
        }
    }
}
