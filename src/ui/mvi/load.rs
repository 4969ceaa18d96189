//! The load lifecycle every screen shares.

use std::marker::PhantomData;

use super::intent::Intent;
use super::reducer::Reducer;
use super::state::UiState;
use crate::repository::FetchError;

/// Result of fetching a screen's data.
///
/// Exactly one branch is active, so stale data can not coexist with a
/// spinner or a leftover error.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> UiState for LoadState<T> where T: Clone + PartialEq + Send + Sync + 'static {}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetch lifecycle events.
#[derive(Debug)]
pub enum LoadIntent<T> {
    /// A fetch was issued; any previous result is dropped.
    Started,
    Resolved(Result<T, FetchError>),
}

impl<T: Send + 'static> Intent for LoadIntent<T> {}

/// Intents that can express the fetch lifecycle.
///
/// [`StateHolder::load`](super::StateHolder::load) builds these to report
/// progress into the reducer.
pub trait Loadable: Intent {
    type Data: Send + 'static;

    fn started() -> Self;

    fn resolved(result: Result<Self::Data, FetchError>) -> Self;
}

impl<T: Send + 'static> Loadable for LoadIntent<T> {
    type Data = T;

    fn started() -> Self {
        LoadIntent::Started
    }

    fn resolved(result: Result<T, FetchError>) -> Self {
        LoadIntent::Resolved(result)
    }
}

/// Reducer for a bare [`LoadState`].
pub struct LoadReducer<T>(PhantomData<fn() -> T>);

impl<T> Reducer for LoadReducer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    type State = LoadState<T>;
    type Intent = LoadIntent<T>;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadIntent::Started => LoadState::Loading,
            LoadIntent::Resolved(Ok(data)) => LoadState::Loaded(data),
            LoadIntent::Resolved(Err(err)) => LoadState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Numbers = LoadReducer<Vec<u32>>;

    #[test]
    fn default_is_loading() {
        assert!(LoadState::<Vec<u32>>::default().is_loading());
    }

    #[test]
    fn success_replaces_failure() {
        let state = LoadState::Failed("boom".to_string());
        let state = Numbers::reduce(state, LoadIntent::Resolved(Ok(vec![1, 2])));
        assert_eq!(state, LoadState::Loaded(vec![1, 2]));
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_keeps_only_the_message() {
        let state = Numbers::reduce(
            LoadState::Loaded(vec![7]),
            LoadIntent::Resolved(Err(FetchError::new("offline"))),
        );
        assert_eq!(state.error(), Some("offline"));
        assert!(state.data().is_none());
    }

    #[test]
    fn started_discards_previous_data() {
        let state = Numbers::reduce(LoadState::Loaded(vec![7]), LoadIntent::Started);
        assert!(state.is_loading());
    }
}
