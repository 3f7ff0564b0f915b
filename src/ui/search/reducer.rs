use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchFormState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchFormState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut term = state.term;
        match intent {
            SearchIntent::Insert(ch) => term.push(ch),
            SearchIntent::Backspace => {
                term.pop();
            }
            SearchIntent::Clear => term.clear(),
        }
        SearchFormState { term }
    }
}
