use crate::api::FetchCompletion;
use crate::stories::Story;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum StoriesIntent {
    /// A request was sent.
    FetchInit,
    /// A request resolved with a page of hits. Page 0 starts a new result set.
    FetchSuccess { list: Vec<Story>, page: u32 },
    /// A request failed for any reason.
    FetchFailure,
    /// Drop every story with this id.
    RemoveStory { object_id: String },
}

impl Intent for StoriesIntent {}

/// Every failure kind collapses into `FetchFailure` here.
impl From<FetchCompletion> for StoriesIntent {
    fn from(completion: FetchCompletion) -> Self {
        match completion.outcome {
            Ok(response) => StoriesIntent::FetchSuccess {
                list: response.hits,
                page: response.page,
            },
            Err(_) => StoriesIntent::FetchFailure,
        }
    }
}
