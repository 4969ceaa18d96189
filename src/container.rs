//! Composition root.
//!
//! Builds repository → view model → coordinator graphs with plain
//! constructor injection. Repositories are shared singletons; view models
//! and coordinators are created fresh on every call.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::navigation::Navigator;
use crate::repository::{
    CategoryRepository, FaultInjecting, InMemoryCategoryRepository, InMemoryProductRepository,
    InMemoryUserRepository, ProductRepository, UserRepository,
};
use crate::ui::categories::{CategoryManagerCoordinator, CategoryManagerViewModel};
use crate::ui::detail::{DetailCoordinator, DetailViewModel};
use crate::ui::products::{MainCoordinator, MainViewModel};

pub struct Container {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
    runtime: Handle,
}

impl Container {
    /// Wires the in-memory repositories described by `config`.
    pub fn new(config: &Config, runtime: Handle) -> Self {
        let latency = config.repository.latency();
        let fail_first = config.repository.fail_first;

        let products: Arc<dyn ProductRepository> = if fail_first > 0 {
            Arc::new(FaultInjecting::new(
                InMemoryProductRepository::with_latency(latency),
                fail_first,
            ))
        } else {
            Arc::new(InMemoryProductRepository::with_latency(latency))
        };
        let categories: Arc<dyn CategoryRepository> = if fail_first > 0 {
            Arc::new(FaultInjecting::new(
                InMemoryCategoryRepository::with_latency(latency),
                fail_first,
            ))
        } else {
            Arc::new(InMemoryCategoryRepository::with_latency(latency))
        };

        tracing::debug!(
            latency_ms = config.repository.latency_ms,
            fail_first,
            "Container ready"
        );
        Self::with_repositories(products, categories, runtime)
    }

    /// Wires caller-supplied repositories.
    pub fn with_repositories(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        runtime: Handle,
    ) -> Self {
        Self {
            products,
            categories,
            runtime,
        }
    }

    pub fn product_repository(&self) -> Arc<dyn ProductRepository> {
        Arc::clone(&self.products)
    }

    pub fn category_repository(&self) -> Arc<dyn CategoryRepository> {
        Arc::clone(&self.categories)
    }

    /// A new instance on every call.
    pub fn user_repository(&self) -> Box<dyn UserRepository> {
        Box::new(InMemoryUserRepository::new())
    }

    pub fn main_view_model(&self) -> MainViewModel {
        MainViewModel::new(self.product_repository(), self.runtime.clone())
    }

    pub fn detail_view_model(&self, product_id: &str) -> DetailViewModel {
        DetailViewModel::new(product_id, self.product_repository(), self.runtime.clone())
    }

    pub fn category_manager_view_model(&self) -> CategoryManagerViewModel {
        CategoryManagerViewModel::new(self.category_repository(), self.runtime.clone())
    }

    pub fn main_coordinator(&self, navigator: Arc<dyn Navigator>) -> MainCoordinator {
        MainCoordinator::new(self.main_view_model(), navigator)
    }

    pub fn detail_coordinator(
        &self,
        product_id: &str,
        navigator: Arc<dyn Navigator>,
    ) -> DetailCoordinator {
        DetailCoordinator::new(self.detail_view_model(product_id), navigator)
    }

    pub fn category_manager_coordinator(
        &self,
        navigator: Arc<dyn Navigator>,
    ) -> CategoryManagerCoordinator {
        CategoryManagerCoordinator::new(self.category_manager_view_model(), navigator)
    }
}
