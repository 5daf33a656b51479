//! Model-View-Intent primitives for the shopping list screen.
//!
//! ```text
//! key/paste ──→ Intent ──→ Reducer ──→ State ──→ render
//!                  ↑                               │
//!                  └───────────────────────────────┘
//! ```
//!
//! Each reduction consumes the previous snapshot and returns the next one,
//! so the view only ever sees whole snapshots.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
