use super::intent::Intent;
use super::state::UiState;

/// The only place a state slot changes.
///
/// `reduce` must be pure: the same state and intent always give the same
/// next state, with no I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
