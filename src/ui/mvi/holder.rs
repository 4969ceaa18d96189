//! Single-writer container for one screen's state.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::load::Loadable;
use super::reducer::Reducer;
use crate::repository::FetchError;

/// Owns a screen's state and the fetch currently feeding it.
///
/// Every transition goes through `R::reduce` and is published on a
/// `watch` channel. Readers take snapshots with [`state`](Self::state) or
/// follow changes with [`subscribe`](Self::subscribe).
///
/// Fetches are numbered. Only the most recently issued fetch may write its
/// result; starting a new one aborts the previous task, and dropping the
/// holder aborts whatever is still running.
pub struct StateHolder<R: Reducer> {
    shared: Arc<Shared<R::State>>,
    runtime: Handle,
    _reducer: PhantomData<fn() -> R>,
}

struct Shared<S> {
    state: watch::Sender<S>,
    inflight: Mutex<InFlight>,
}

#[derive(Default)]
struct InFlight {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl<R: Reducer> StateHolder<R> {
    /// Fetches are spawned on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        let (state, _) = watch::channel(R::State::default());
        Self {
            shared: Arc::new(Shared {
                state,
                inflight: Mutex::new(InFlight::default()),
            }),
            runtime,
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> R::State {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.shared.state.subscribe()
    }

    /// Applies a synchronous intent.
    pub fn dispatch(&self, intent: R::Intent) {
        apply::<R>(&self.shared, intent);
    }

    /// Number of fetches issued so far.
    pub fn generation(&self) -> u64 {
        self.shared.inflight.lock().generation
    }
}

impl<R> StateHolder<R>
where
    R: Reducer + 'static,
    R::Intent: Loadable,
{
    /// Issues a fetch and routes its outcome through the reducer.
    ///
    /// The state moves to whatever `started()` reduces to right away; the
    /// result is applied later only if no newer fetch was issued meanwhile.
    pub fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<<R::Intent as Loadable>::Data, FetchError>> + Send + 'static,
    {
        let mut inflight = self.shared.inflight.lock();
        inflight.generation += 1;
        let generation = inflight.generation;

        if let Some(previous) = inflight.task.take() {
            if !previous.is_finished() {
                tracing::debug!(generation, "Superseding in-flight fetch");
            }
            previous.abort();
        }

        apply::<R>(&self.shared, <R::Intent as Loadable>::started());

        let shared: Weak<Shared<R::State>> = Arc::downgrade(&self.shared);
        inflight.task = Some(self.runtime.spawn(async move {
            let result = fetch.await;
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let mut inflight = shared.inflight.lock();
            if inflight.generation != generation {
                tracing::debug!(
                    generation,
                    current = inflight.generation,
                    "Discarding stale fetch result"
                );
                return;
            }
            inflight.task = None;
            if let Err(err) = &result {
                tracing::warn!(generation, error = %err, "Fetch failed");
            }
            apply::<R>(&shared, <R::Intent as Loadable>::resolved(result));
        }));
    }
}

impl<R: Reducer> Drop for StateHolder<R> {
    fn drop(&mut self) {
        if let Some(task) = self.shared.inflight.lock().task.take() {
            task.abort();
        }
    }
}

fn apply<R: Reducer>(shared: &Shared<R::State>, intent: R::Intent) {
    shared.state.send_if_modified(|state| {
        let next = R::reduce(state.clone(), intent);
        if next == *state {
            return false;
        }
        tracing::trace!("State updated");
        *state = next;
        true
    });
}
