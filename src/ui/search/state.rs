use crate::ui::mvi::UiState;

/// Text currently in the search box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFormState {
    pub term: String,
}

impl UiState for SearchFormState {}

impl SearchFormState {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// Submit is disabled while the box is empty.
    pub fn can_submit(&self) -> bool {
        !self.term.is_empty()
    }
}
