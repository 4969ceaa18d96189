use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;

use super::intent::CategoryManagerIntent;
use super::reducer::CategoryManagerReducer;
use super::state::CategoryManagerState;
use crate::model::Category;
use crate::repository::{CategoryRepository, FetchError};
use crate::ui::mvi::StateHolder;

pub struct CategoryManagerViewModel {
    repository: Arc<dyn CategoryRepository>,
    holder: StateHolder<CategoryManagerReducer>,
}

impl CategoryManagerViewModel {
    pub fn new(repository: Arc<dyn CategoryRepository>, runtime: Handle) -> Self {
        let view_model = Self {
            repository,
            holder: StateHolder::new(runtime),
        };
        view_model.load_categories();
        view_model
    }

    pub fn state(&self) -> CategoryManagerState {
        self.holder.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CategoryManagerState> {
        self.holder.subscribe()
    }

    /// Makes `category` the catalogue parent.
    pub fn update_catalogue_parent_id(&self, category: &Category) {
        tracing::info!(parent_id = %category.id, "Catalogue parent updated");
        self.holder.dispatch(CategoryManagerIntent::Select {
            category_id: category.id.clone(),
        });
    }

    pub fn retry(&self) {
        tracing::debug!("Retrying category list");
        self.load_categories();
    }

    fn load_categories(&self) {
        let repository = Arc::clone(&self.repository);
        self.holder.load(async move {
            repository.get_all().await.map_err(|err| {
                FetchError::new(format!("Failed to load categories: {}", err))
            })
        });
    }
}
