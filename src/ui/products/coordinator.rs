use std::sync::Arc;

use tokio::sync::watch;

use super::view_model::{MainState, MainViewModel};
use crate::navigation::{Navigator, Route};

/// Routes product list intents to the view model or the navigator.
pub struct MainCoordinator {
    view_model: MainViewModel,
    navigator: Arc<dyn Navigator>,
}

impl MainCoordinator {
    pub fn new(view_model: MainViewModel, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            view_model,
            navigator,
        }
    }

    pub fn state(&self) -> MainState {
        self.view_model.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<MainState> {
        self.view_model.subscribe()
    }

    pub fn on_product_click(&self, product_id: &str) {
        self.navigator.navigate(&Route::detail(product_id).to_string());
    }

    pub fn on_categories_click(&self) {
        self.navigator.navigate(Route::CATEGORIES);
    }

    pub fn on_retry(&self) {
        self.view_model.retry();
    }
}
