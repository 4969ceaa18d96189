//! Product detail screen ("detail/{id}").

mod coordinator;
mod view_model;

pub use coordinator::DetailCoordinator;
pub use view_model::{DetailState, DetailViewModel};
