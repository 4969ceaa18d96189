//! Data access for catalog entities.
//!
//! Repositories are read-only and backed by static in-memory lists. Each call
//! rebuilds its list; lookups by id are linear scans over `get_all`.

mod category;
mod error;
mod flaky;
mod product;
mod user;

use std::time::Duration;

pub use category::{CategoryRepository, InMemoryCategoryRepository};
pub use error::FetchError;
pub use flaky::FaultInjecting;
pub use product::{InMemoryProductRepository, ProductRepository};
pub use user::{InMemoryUserRepository, UserRepository};

/// Await the configured artificial latency, if any.
async fn simulate_io(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
