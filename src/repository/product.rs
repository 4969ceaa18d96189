use std::time::Duration;

use async_trait::async_trait;

use super::{simulate_io, FetchError};
use crate::model::{Price, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, FetchError>;

    /// Default lookup scans `get_all`.
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, FetchError> {
        Ok(self.get_all().await?.into_iter().find(|p| p.id == id))
    }
}

/// The five products of the demo catalog.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    latency: Duration,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps for `latency` before answering.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn catalog() -> Vec<Product> {
        [
            (
                "1",
                "Smartphone Galaxy S23",
                Price::from_major_minor(899, 99),
                "Un smartphone haut de gamme avec une caméra exceptionnelle",
            ),
            (
                "2",
                "Laptop UltraBook Pro",
                Price::from_major_minor(1299, 99),
                "Ordinateur portable fin et léger avec une excellente autonomie",
            ),
            (
                "3",
                "Écouteurs sans fil NoiseCancel",
                Price::from_major_minor(199, 99),
                "Écouteurs avec réduction de bruit active et son immersif",
            ),
            (
                "4",
                "Montre connectée FitTech",
                Price::from_major_minor(249, 99),
                "Montre connectée avec suivi d'activité et notifications",
            ),
            (
                "5",
                "Tablette MediaTab 10",
                Price::from_major_minor(349, 99),
                "Tablette 10 pouces avec écran haute définition pour le multimédia",
            ),
        ]
        .into_iter()
        .map(|(id, name, price, description)| {
            Product::new(id, name, price).with_description(description)
        })
        .collect()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, FetchError> {
        simulate_io(self.latency).await;
        Ok(Self::catalog())
    }
}
