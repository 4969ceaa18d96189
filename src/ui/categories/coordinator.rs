use std::sync::Arc;

use tokio::sync::watch;

use super::state::CategoryManagerState;
use super::view_model::CategoryManagerViewModel;
use crate::model::Category;
use crate::navigation::{Navigator, Route};

/// Handles category grid actions.
pub struct CategoryManagerCoordinator {
    view_model: CategoryManagerViewModel,
    navigator: Arc<dyn Navigator>,
}

impl CategoryManagerCoordinator {
    pub fn new(view_model: CategoryManagerViewModel, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            view_model,
            navigator,
        }
    }

    pub fn state(&self) -> CategoryManagerState {
        self.view_model.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CategoryManagerState> {
        self.view_model.subscribe()
    }

    pub fn on_category_click(&self, category: &Category) {
        self.view_model.update_catalogue_parent_id(category);
    }

    pub fn on_retry_click(&self) {
        self.view_model.retry();
    }

    pub fn on_back_click(&self) {
        self.navigator.navigate(Route::MAIN);
    }
}
