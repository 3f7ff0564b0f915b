use crate::ui::mvi::Reducer;
use crate::ui::stories::intent::StoriesIntent;
use crate::ui::stories::state::StoriesState;

pub struct StoriesReducer;

impl Reducer for StoriesReducer {
    type State = StoriesState;
    type Intent = StoriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoriesIntent::FetchInit => StoriesState {
                is_loading: true,
                is_error: false,
                ..state
            },
            StoriesIntent::FetchSuccess { list, page } => {
                let data = if page == 0 {
                    list
                } else {
                    let mut data = state.data;
                    data.extend(list);
                    data
                };
                StoriesState {
                    data,
                    page,
                    is_loading: false,
                    is_error: false,
                }
            }
            StoriesIntent::FetchFailure => StoriesState {
                is_loading: false,
                is_error: true,
                ..state
            },
            StoriesIntent::RemoveStory { object_id } => {
                let mut data = state.data;
                data.retain(|story| story.object_id != object_id);
                StoriesState { data, ..state }
            }
        }
    }
}
