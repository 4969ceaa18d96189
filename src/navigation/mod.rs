//! Screen-to-screen navigation.
//!
//! Coordinators only see the [`Navigator`] capability and hand it opaque
//! route tokens. [`NavStack`] is the concrete back stack driven by the UI
//! loop.

mod route;
mod stack;

pub use route::{Route, RouteError};
pub use stack::NavStack;

/// Requests a transition to the screen named by `route`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}
