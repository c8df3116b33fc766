use super::intent::Intent;
use super::state::UiState;

/// `(State, Intent) -> State`, total and free of side effects.
///
/// Stores call this for every mutation, so a reducer never fails and
/// never touches the network.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
