/// Marker trait for the messages a reducer accepts.
///
/// Intents come from key presses and from fetch completions; both end up
/// on the UI thread before they are reduced.
pub trait Intent: Send + 'static {}
