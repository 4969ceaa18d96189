//! Shared test utilities: scripted repositories and state helpers.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use catalog::container::Container;
use catalog::model::{Category, Price, Product};
use catalog::navigation::Navigator;
use catalog::repository::{CategoryRepository, FetchError, ProductRepository};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{oneshot, watch};

const TIMEOUT: Duration = Duration::from_secs(2);

type Responder<T> = oneshot::Sender<Result<T, FetchError>>;

/// Repository whose fetches block until the test answers them.
///
/// Every `get_all` call registers a responder, numbered from 0 in call
/// order. A fetch whose task was aborted drops its receiver, which makes
/// `respond` return false.
pub struct Scripted<T> {
    calls: Mutex<Vec<Option<Responder<T>>>>,
}

impl<T: Send + 'static> Scripted<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    async fn next(&self) -> Result<T, FetchError> {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(FetchError::new("responder dropped")))
    }

    /// Waits until at least `count` fetches have been issued.
    pub async fn wait_for_calls(&self, count: usize) {
        tokio::time::timeout(TIMEOUT, async {
            while self.call_count() < count {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .expect("timed out waiting for fetch");
    }

    /// Answers fetch number `call`. Returns false if that fetch was cancelled.
    pub fn respond(&self, call: usize, result: Result<T, FetchError>) -> bool {
        let responder = self.calls.lock()[call]
            .take()
            .expect("fetch already answered");
        responder.send(result).is_ok()
    }

    /// Resolves once the task behind fetch `call` has been dropped.
    pub async fn wait_cancelled(&self, call: usize) -> bool {
        let mut responder = self.calls.lock()[call]
            .take()
            .expect("fetch already answered");
        tokio::time::timeout(TIMEOUT, responder.closed()).await.is_ok()
    }
}

#[async_trait]
impl ProductRepository for Scripted<Vec<Product>> {
    async fn get_all(&self) -> Result<Vec<Product>, FetchError> {
        self.next().await
    }
}

#[async_trait]
impl CategoryRepository for Scripted<Vec<Category>> {
    async fn get_all(&self) -> Result<Vec<Category>, FetchError> {
        self.next().await
    }
}

/// Navigator that only records requested routes.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}

pub fn products(names: &[&str]) -> Vec<Product> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Product::new((i + 1).to_string(), *name, Price::from_cents(100)))
        .collect()
}

pub fn categories(names: &[&str]) -> Vec<Category> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Category::new((i + 1).to_string(), *name))
        .collect()
}

/// Container over scripted repositories on the current runtime.
pub fn scripted_container(
    products: Arc<Scripted<Vec<Product>>>,
    categories: Arc<Scripted<Vec<Category>>>,
) -> Container {
    Container::with_repositories(products, categories, Handle::current())
}

/// Waits until the state satisfies `pred` and returns it.
pub async fn wait_until<T: Clone>(
    rx: &mut watch::Receiver<T>,
    pred: impl FnMut(&T) -> bool,
) -> T {
    tokio::time::timeout(TIMEOUT, rx.wait_for(pred))
        .await
        .expect("timed out waiting for state")
        .expect("state channel closed")
        .clone()
}
