use crate::stories::SortKey;
use crate::ui::mvi::Intent;

/// View-only list changes. `len` is the number of rows currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    SortBy(SortKey),
    MoveUp { len: usize },
    MoveDown { len: usize },
    /// Keep the cursor inside the list after rows were removed or replaced.
    Clamp { len: usize },
}

impl Intent for ListIntent {}
