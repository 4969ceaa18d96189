use std::time::Duration;

use async_trait::async_trait;

use super::{simulate_io, FetchError};
use crate::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, FetchError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Category>, FetchError> {
        Ok(self.get_all().await?.into_iter().find(|c| c.id == id))
    }
}

/// Six top-level grocery categories, each with an image.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    latency: Duration,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn categories() -> Vec<Category> {
        [
            ("1", "Fruits et Légumes", "fruits"),
            ("2", "Viandes", "viandes"),
            ("3", "Produits Laitiers", "laitiers"),
            ("4", "Boissons", "boissons"),
            ("5", "Épicerie", "epicerie"),
            ("6", "Surgelés", "surgeles"),
        ]
        .into_iter()
        .map(|(id, name, slug)| {
            Category::new(id, name).with_image(format!("https://example.com/{slug}.jpg"))
        })
        .collect()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> Result<Vec<Category>, FetchError> {
        simulate_io(self.latency).await;
        Ok(Self::categories())
    }
}
