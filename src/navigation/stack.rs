use parking_lot::Mutex;
use tokio::sync::watch;

use super::{Navigator, Route};

/// Back stack of visited routes.
///
/// The stack is never empty. Navigating to the root pops everything up to
/// and including the previous root entry, so a stale detail screen can not
/// be re-entered with back navigation.
pub struct NavStack {
    entries: Mutex<Vec<Route>>,
    current: watch::Sender<Route>,
}

impl NavStack {
    pub fn new(start: Route) -> Self {
        let mut entries = vec![Route::Main];
        if !start.is_root() {
            entries.push(start.clone());
        }
        let top = entries.last().cloned().unwrap_or(Route::Main);
        let (current, _) = watch::channel(top);
        Self {
            entries: Mutex::new(entries),
            current,
        }
    }

    /// Route on top of the stack.
    pub fn current(&self) -> Route {
        self.current.borrow().clone()
    }

    /// Snapshot of the whole stack, bottom first.
    pub fn entries(&self) -> Vec<Route> {
        self.entries.lock().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current.subscribe()
    }

    pub fn push(&self, route: Route) {
        let mut entries = self.entries.lock();
        if route.is_root() {
            // pop up to root, inclusive
            if let Some(root) = entries.iter().position(Route::is_root) {
                entries.truncate(root);
            }
        }
        entries.push(route.clone());
        tracing::info!(route = %route, depth = entries.len(), "Navigated");
        self.current.send_replace(route);
    }

    /// Pops the top entry. Returns false when already at the bottom.
    pub fn back(&self) -> bool {
        let mut entries = self.entries.lock();
        if entries.len() <= 1 {
            return false;
        }
        entries.pop();
        let top = entries.last().cloned().unwrap_or(Route::Main);
        tracing::info!(route = %top, depth = entries.len(), "Navigated back");
        self.current.send_replace(top);
        true
    }
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new(Route::Main)
    }
}

impl Navigator for NavStack {
    fn navigate(&self, route: &str) {
        match route.parse::<Route>() {
            Ok(route) => self.push(route),
            Err(err) => tracing::warn!(error = %err, "Navigation request ignored"),
        }
    }
}
