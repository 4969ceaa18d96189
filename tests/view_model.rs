mod common;

use catalog::model::{Category, Product};
use catalog::repository::FetchError;
use catalog::ui::categories::CategoryManagerViewModel;
use catalog::ui::detail::DetailViewModel;
use catalog::ui::mvi::LoadState;
use catalog::ui::products::MainViewModel;
use common::{categories, products, wait_until, Scripted};
use tokio::runtime::Handle;

#[tokio::test]
async fn loading_until_first_fetch_resolves() {
    let repo = Scripted::<Vec<Product>>::new();
    let vm = MainViewModel::new(repo.clone(), Handle::current());

    repo.wait_for_calls(1).await;
    assert!(vm.state().is_loading());

    assert!(repo.respond(0, Ok(products(&["Phone", "Laptop"]))));
    let state = wait_until(&mut vm.subscribe(), |s| !s.is_loading()).await;
    assert_eq!(state, LoadState::Loaded(products(&["Phone", "Laptop"])));
    assert_eq!(repo.call_count(), 1);
}

#[tokio::test]
async fn failure_becomes_failed_state() {
    let repo = Scripted::<Vec<Product>>::new();
    let vm = MainViewModel::new(repo.clone(), Handle::current());

    repo.wait_for_calls(1).await;
    repo.respond(0, Err(FetchError::new("backend unreachable")));

    let state = wait_until(&mut vm.subscribe(), |s| !s.is_loading()).await;
    assert_eq!(state, LoadState::Failed("backend unreachable".to_string()));
    assert!(state.data().is_none());
}

#[tokio::test]
async fn retry_recovers_from_failure() {
    let repo = Scripted::<Vec<Product>>::new();
    let vm = MainViewModel::new(repo.clone(), Handle::current());
    let mut rx = vm.subscribe();

    repo.wait_for_calls(1).await;
    repo.respond(0, Err(FetchError::new("offline")));
    wait_until(&mut rx, |s| s.error().is_some()).await;

    vm.retry();
    assert!(vm.state().is_loading());

    repo.wait_for_calls(2).await;
    repo.respond(1, Ok(products(&["Tablet"])));
    let state = wait_until(&mut rx, |s| !s.is_loading()).await;
    assert_eq!(state.data().map(Vec::len), Some(1));
}

#[tokio::test]
async fn concurrent_retries_keep_latest_result() {
    let repo = Scripted::<Vec<Product>>::new();
    let vm = MainViewModel::new(repo.clone(), Handle::current());
    repo.wait_for_calls(1).await;

    vm.retry();
    repo.wait_for_calls(2).await;
    vm.retry();
    repo.wait_for_calls(3).await;

    // answer newest first, then the superseded ones
    assert!(repo.respond(2, Ok(products(&["third"]))));
    let state = wait_until(&mut vm.subscribe(), |s| !s.is_loading()).await;
    assert_eq!(state, LoadState::Loaded(products(&["third"])));

    assert!(!repo.respond(0, Ok(products(&["first"]))));
    assert!(!repo.respond(1, Err(FetchError::new("second failed"))));
    tokio::task::yield_now().await;
    assert_eq!(vm.state(), LoadState::Loaded(products(&["third"])));
}

#[tokio::test]
async fn stale_result_cannot_overwrite_newer_loading() {
    let repo = Scripted::<Vec<Product>>::new();
    let vm = MainViewModel::new(repo.clone(), Handle::current());
    repo.wait_for_calls(1).await;

    vm.retry();
    repo.wait_for_calls(2).await;

    repo.respond(0, Ok(products(&["old"])));
    tokio::task::yield_now().await;
    assert!(vm.state().is_loading());

    repo.respond(1, Ok(products(&["new"])));
    let state = wait_until(&mut vm.subscribe(), |s| !s.is_loading()).await;
    assert_eq!(state, LoadState::Loaded(products(&["new"])));
}

#[tokio::test]
async fn dropping_view_model_cancels_fetch() {
    let repo = Scripted::<Vec<Product>>::new();
    let vm = MainViewModel::new(repo.clone(), Handle::current());
    repo.wait_for_calls(1).await;

    drop(vm);
    assert!(repo.wait_cancelled(0).await);
}

#[tokio::test]
async fn detail_loads_by_id() {
    let repo = Scripted::<Vec<Product>>::new();
    let vm = DetailViewModel::new("2", repo.clone(), Handle::current());
    assert_eq!(vm.product_id(), "2");

    repo.wait_for_calls(1).await;
    repo.respond(0, Ok(products(&["Phone", "Laptop", "Headphones"])));

    let state = wait_until(&mut vm.subscribe(), |s| !s.is_loading()).await;
    let product = state.data().cloned().flatten().unwrap();
    assert_eq!(product.name, "Laptop");
}

#[tokio::test]
async fn detail_unknown_id_is_loaded_none() {
    let repo = Scripted::<Vec<Product>>::new();
    let vm = DetailViewModel::new("99", repo.clone(), Handle::current());

    repo.wait_for_calls(1).await;
    repo.respond(0, Ok(products(&["Phone"])));

    let state = wait_until(&mut vm.subscribe(), |s| !s.is_loading()).await;
    assert_eq!(state, LoadState::Loaded(None));
}

#[tokio::test]
async fn category_failure_is_prefixed() {
    let repo = Scripted::<Vec<Category>>::new();
    let vm = CategoryManagerViewModel::new(repo.clone(), Handle::current());

    repo.wait_for_calls(1).await;
    repo.respond(0, Err(FetchError::new("disk on fire")));

    let state = wait_until(&mut vm.subscribe(), |s| !s.categories.is_loading()).await;
    assert_eq!(
        state.categories.error(),
        Some("Failed to load categories: disk on fire")
    );
}

#[tokio::test]
async fn category_selection_does_not_reload() {
    let repo = Scripted::<Vec<Category>>::new();
    let vm = CategoryManagerViewModel::new(repo.clone(), Handle::current());
    let mut rx = vm.subscribe();

    repo.wait_for_calls(1).await;
    repo.respond(0, Ok(categories(&["Fruits", "Viandes", "Boissons"])));
    let loaded = wait_until(&mut rx, |s| !s.categories.is_loading()).await;

    let viandes = loaded.categories.data().unwrap()[1].clone();
    vm.update_catalogue_parent_id(&viandes);

    let state = vm.state();
    assert_eq!(state.selected_parent_id.as_deref(), Some("2"));
    assert_eq!(state.categories, loaded.categories);
    assert!(state.is_selected(&viandes));
    assert_eq!(repo.call_count(), 1);
}

#[tokio::test]
async fn category_selection_survives_retry() {
    let repo = Scripted::<Vec<Category>>::new();
    let vm = CategoryManagerViewModel::new(repo.clone(), Handle::current());
    let mut rx = vm.subscribe();

    repo.wait_for_calls(1).await;
    repo.respond(0, Ok(categories(&["Fruits"])));
    let loaded = wait_until(&mut rx, |s| !s.categories.is_loading()).await;
    vm.update_catalogue_parent_id(&loaded.categories.data().unwrap()[0]);

    vm.retry();
    assert!(vm.state().categories.is_loading());
    repo.wait_for_calls(2).await;
    repo.respond(1, Ok(categories(&["Fruits", "Surgelés"])));

    let state = wait_until(&mut rx, |s| !s.categories.is_loading()).await;
    assert_eq!(state.categories.data().map(Vec::len), Some(2));
    assert_eq!(state.selected_parent_id.as_deref(), Some("1"));
}
