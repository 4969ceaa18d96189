//! Fault injection for exercising the retry path.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use super::{CategoryRepository, FetchError, ProductRepository};
use crate::model::{Category, Product};

/// Wraps a repository so that its first `failures` fetches fail.
///
/// Only `get_all` counts; the default `get_by_id` goes through it.
pub struct FaultInjecting<R> {
    inner: R,
    failures: u32,
    attempts: AtomicU32,
}

impl<R> FaultInjecting<R> {
    pub fn new(inner: R, failures: u32) -> Self {
        Self {
            inner,
            failures,
            attempts: AtomicU32::new(0),
        }
    }

    fn check(&self) -> Result<(), FetchError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= self.failures {
            tracing::warn!(attempt, failures = self.failures, "Injected fetch failure");
            return Err(FetchError::new(format!(
                "simulated outage ({} of {})",
                attempt, self.failures
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<R: ProductRepository> ProductRepository for FaultInjecting<R> {
    async fn get_all(&self) -> Result<Vec<Product>, FetchError> {
        self.check()?;
        self.inner.get_all().await
    }
}

#[async_trait]
impl<R: CategoryRepository> CategoryRepository for FaultInjecting<R> {
    async fn get_all(&self) -> Result<Vec<Category>, FetchError> {
        self.check()?;
        self.inner.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProductRepository;

    #[tokio::test]
    async fn fails_then_recovers() {
        let repo = FaultInjecting::new(InMemoryProductRepository::new(), 2);

        let first = ProductRepository::get_all(&repo).await.unwrap_err();
        assert_eq!(first.message(), "simulated outage (1 of 2)");
        assert!(ProductRepository::get_all(&repo).await.is_err());
        assert_eq!(ProductRepository::get_all(&repo).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn zero_failures_is_transparent() {
        let repo = FaultInjecting::new(InMemoryProductRepository::new(), 0);
        assert!(ProductRepository::get_by_id(&repo, "1").await.unwrap().is_some());
    }
}
