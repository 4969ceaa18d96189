use std::sync::Arc;

use tokio::sync::watch;

use super::view_model::{DetailState, DetailViewModel};
use crate::navigation::{Navigator, Route};

pub struct DetailCoordinator {
    view_model: DetailViewModel,
    navigator: Arc<dyn Navigator>,
}

impl DetailCoordinator {
    pub fn new(view_model: DetailViewModel, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            view_model,
            navigator,
        }
    }

    pub fn product_id(&self) -> &str {
        self.view_model.product_id()
    }

    pub fn state(&self) -> DetailState {
        self.view_model.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.view_model.subscribe()
    }

    /// Returns to the root, discarding this entry from history.
    pub fn on_back_click(&self) {
        self.navigator.navigate(Route::MAIN);
    }

    pub fn on_categories_click(&self) {
        self.navigator.navigate(Route::CATEGORIES);
    }

    pub fn on_retry(&self) {
        self.view_model.retry();
    }
}
