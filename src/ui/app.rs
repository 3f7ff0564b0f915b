use crate::api::{FetchCompletion, FetchOrchestrator};
use crate::stories::{sorted, total_comments, SortKey, Story};
use crate::storage::{KeyValueStore, PersistedValue};
use crate::ui::events::AppEvent;
use crate::ui::list::{ListIntent, ListReducer, ListViewState};
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchFormState, SearchIntent, SearchReducer};
use crate::ui::stories::{StoriesIntent, StoriesReducer, StoriesState};

pub type SearchTerm = PersistedValue<Box<dyn KeyValueStore>>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    List,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// All UI state plus the handles that produce side effects.
///
/// Fetch state, form text and list view state are separate slots, each
/// changed only through its reducer.
pub struct App {
    should_quit: bool,
    focus: Focus,
    stories: StoriesState,
    search: SearchFormState,
    list: ListViewState,
    search_term: SearchTerm,
    fetcher: FetchOrchestrator<AppEvent>,
}

impl App {
    pub fn new(search_term: SearchTerm, fetcher: FetchOrchestrator<AppEvent>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Search,
            stories: StoriesState::default(),
            search: SearchFormState::new(search_term.get()),
            list: ListViewState::default(),
            search_term,
            fetcher,
        }
    }

    /// First fetch with the hydrated term.
    pub fn start(&mut self) {
        let term = self.search.term.clone();
        self.start_search(&term);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::List,
            Focus::List => Focus::Search,
        };
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    pub fn search(&self) -> &SearchFormState {
        &self.search
    }

    pub fn list_view(&self) -> &ListViewState {
        &self.list
    }

    /// Term of the last submitted search, which `more` continues.
    pub fn active_term(&self) -> Option<&str> {
        self.fetcher.last_term()
    }

    pub fn persisted_term(&self) -> &str {
        self.search_term.get()
    }

    pub fn total_comments(&self) -> u64 {
        total_comments(&self.stories.data)
    }

    /// Stories in display order.
    pub fn visible_stories(&self) -> Vec<&Story> {
        sorted(&self.stories.data, self.list.sort)
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.visible_stories().get(self.list.selected).copied()
    }

    // -- search form ----------------------------------------------------------

    pub fn on_search_input(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
        if let Err(err) = self.search_term.set(self.search.term.clone()) {
            tracing::warn!(key = self.search_term.key(), "failed to persist search term: {}", err);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            dispatch_mvi!(self, search, SearchReducer, SearchIntent::Insert(ch));
        }
        if let Err(err) = self.search_term.set(self.search.term.clone()) {
            tracing::warn!(key = self.search_term.key(), "failed to persist search term: {}", err);
        }
    }

    /// Returns false when the form is empty and nothing was sent.
    pub fn on_search_submit(&mut self) -> bool {
        if !self.search.can_submit() {
            return false;
        }
        let term = self.search.term.clone();
        self.start_search(&term);
        true
    }

    fn start_search(&mut self, term: &str) {
        self.dispatch_stories(StoriesIntent::FetchInit);
        self.fetcher.search(term);
    }

    // -- list -----------------------------------------------------------------

    /// Loads the next page of the last submitted search.
    ///
    /// Ignored while a request is in flight, like the hidden "More" button.
    pub fn on_more(&mut self) -> bool {
        if self.stories.is_loading || self.fetcher.last_term().is_none() {
            return false;
        }
        self.dispatch_stories(StoriesIntent::FetchInit);
        self.fetcher.more(self.stories.page).is_some()
    }

    pub fn on_remove_item(&mut self, object_id: &str) {
        self.dispatch_stories(StoriesIntent::RemoveStory {
            object_id: object_id.to_string(),
        });
    }

    pub fn remove_selected(&mut self) {
        if let Some(object_id) = self.selected_story().map(|story| story.object_id.clone()) {
            self.on_remove_item(&object_id);
        }
    }

    /// URL of the selected story, if it has one.
    pub fn selected_url(&self) -> Option<&str> {
        self.selected_story()
            .map(|story| story.url.as_str())
            .filter(|url| !url.is_empty())
    }

    pub fn sort_by(&mut self, key: SortKey) {
        dispatch_mvi!(self, list, ListReducer, ListIntent::SortBy(key));
    }

    pub fn select_next(&mut self) {
        let len = self.stories.data.len();
        dispatch_mvi!(self, list, ListReducer, ListIntent::MoveDown { len });
    }

    pub fn select_previous(&mut self) {
        let len = self.stories.data.len();
        dispatch_mvi!(self, list, ListReducer, ListIntent::MoveUp { len });
    }

    // -- fetch completions ----------------------------------------------------

    pub fn on_fetch_completed(&mut self, completion: FetchCompletion) {
        if !self.fetcher.accepts(&completion) {
            tracing::debug!(
                generation = completion.generation,
                latest = self.fetcher.latest_generation(),
                "dropping stale search response"
            );
            return;
        }
        if let Ok(response) = &completion.outcome {
            tracing::info!(
                term = %completion.term,
                page = response.page,
                hits = response.hits.len(),
                "search completed"
            );
        }
        self.dispatch_stories(StoriesIntent::from(completion));
    }

    fn dispatch_stories(&mut self, intent: StoriesIntent) {
        dispatch_mvi!(self, stories, StoriesReducer, intent);
        let len = self.stories.data.len();
        dispatch_mvi!(self, list, ListReducer, ListIntent::Clamp { len });
    }
}
