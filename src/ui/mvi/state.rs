/// Marker trait for a UI state slot.
///
/// `Default` is the initial state; `Clone` lets tests keep the previous
/// snapshot around for comparison.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
