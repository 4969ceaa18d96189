//! Category grid screen ("categories").

mod coordinator;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use coordinator::CategoryManagerCoordinator;
pub use intent::CategoryManagerIntent;
pub use reducer::CategoryManagerReducer;
pub use state::CategoryManagerState;
pub use view_model::CategoryManagerViewModel;
