use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::model::Product;
use crate::repository::ProductRepository;
use crate::ui::mvi::{LoadReducer, LoadState, StateHolder};

/// `Loaded(None)` means the id matched no product.
pub type DetailState = LoadState<Option<Product>>;

pub struct DetailViewModel {
    product_id: String,
    repository: Arc<dyn ProductRepository>,
    holder: StateHolder<LoadReducer<Option<Product>>>,
}

impl DetailViewModel {
    pub fn new(
        product_id: impl Into<String>,
        repository: Arc<dyn ProductRepository>,
        runtime: Handle,
    ) -> Self {
        let view_model = Self {
            product_id: product_id.into(),
            repository,
            holder: StateHolder::new(runtime),
        };
        view_model.load_product();
        view_model
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn state(&self) -> DetailState {
        self.holder.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.holder.subscribe()
    }

    pub fn retry(&self) {
        tracing::debug!(product_id = %self.product_id, "Retrying product detail");
        self.load_product();
    }

    fn load_product(&self) {
        let repository = Arc::clone(&self.repository);
        let product_id = self.product_id.clone();
        self.holder
            .load(async move { repository.get_by_id(&product_id).await });
    }
}
