//! Product list screen ("main").

mod coordinator;
mod view_model;

pub use coordinator::MainCoordinator;
pub use view_model::{MainState, MainViewModel};
