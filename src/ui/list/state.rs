use crate::stories::SortKey;
use crate::ui::mvi::UiState;

/// Sort key and cursor of the story list. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListViewState {
    pub sort: SortKey,
    /// Index into the sorted projection.
    pub selected: usize,
}

impl UiState for ListViewState {}
