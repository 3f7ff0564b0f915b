use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    Insert(char),
    Backspace,
    /// Ctrl+U: wipe the whole term.
    Clear,
}

impl Intent for SearchIntent {}
