//! Model-View-Intent (MVI) primitives shared by every screen.
//!
//! # Architecture
//!
//! ```text
//! Coordinator ──→ Intent ──→ Reducer ──→ State ──→ watch ──→ View
//!      ↑                                                     │
//!      └─────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one screen
//! - **Intent**: user actions and fetch lifecycle events
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **StateHolder**: single writer of a screen's state; runs fetches and
//!   keeps only the result of the latest one

mod holder;
mod intent;
mod load;
mod reducer;
mod state;

pub use holder::StateHolder;
pub use intent::Intent;
pub use load::{LoadIntent, LoadReducer, LoadState, Loadable};
pub use reducer::Reducer;
pub use state::UiState;
