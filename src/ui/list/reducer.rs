use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListViewState;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListViewState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::SortBy(sort) => ListViewState { sort, selected: 0 },
            ListIntent::MoveUp { len } => {
                let selected = if len == 0 {
                    0
                } else if state.selected == 0 {
                    len - 1
                } else {
                    state.selected.min(len) - 1
                };
                ListViewState { selected, ..state }
            }
            ListIntent::MoveDown { len } => {
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                ListViewState { selected, ..state }
            }
            ListIntent::Clamp { len } => ListViewState {
                selected: state.selected.min(len.saturating_sub(1)),
                ..state
            },
        }
    }
}
