//! Intent/reducer primitives shared by the UI state slots.
//!
//! ```text
//! key / fetch event ──→ Intent ──→ Reducer ──→ State ──→ draw
//!        ↑                                               │
//!        └───────────────────────────────────────────────┘
//! ```
//!
//! Each slot (story list, search form, list view) owns its own state type
//! and reducer. Side effects (HTTP, persistence) stay in `App`.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
