use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::model::Product;
use crate::repository::ProductRepository;
use crate::ui::mvi::{LoadReducer, LoadState, StateHolder};

pub type MainState = LoadState<Vec<Product>>;

/// Holds the product list. Loads once on construction.
pub struct MainViewModel {
    repository: Arc<dyn ProductRepository>,
    holder: StateHolder<LoadReducer<Vec<Product>>>,
}

impl MainViewModel {
    pub fn new(repository: Arc<dyn ProductRepository>, runtime: Handle) -> Self {
        let view_model = Self {
            repository,
            holder: StateHolder::new(runtime),
        };
        view_model.load_products();
        view_model
    }

    pub fn state(&self) -> MainState {
        self.holder.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<MainState> {
        self.holder.subscribe()
    }

    pub fn retry(&self) {
        tracing::debug!("Retrying product list");
        self.load_products();
    }

    fn load_products(&self) {
        let repository = Arc::clone(&self.repository);
        self.holder.load(async move { repository.get_all().await });
    }
}
