pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod search_form;
pub mod stories;
pub mod story_table;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
