use crate::stories::Story;
use crate::ui::mvi::UiState;

/// Fetched stories and the lifecycle flags of the last request.
///
/// `data` is in arrival order; display order is derived separately.
/// `page` is the last page that loaded successfully.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub page: u32,
    pub is_loading: bool,
    pub is_error: bool,
}

impl UiState for StoriesState {}
