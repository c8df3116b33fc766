/// Store-held state.
///
/// `Default` is the state after a reset; `PartialEq` lets the store skip
/// waking subscribers when an intent changes nothing.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
