mod intent;
mod reducer;
mod state;

pub use intent::StoriesIntent;
pub use reducer::StoriesReducer;
pub use state::StoriesState;
