/// Something that asks the store to change: a keystroke, a submitted
/// term, a reset, or a message from a settled query.
pub trait Intent: Send + 'static {}
