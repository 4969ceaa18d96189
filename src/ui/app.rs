use std::sync::Arc;

use crate::container::Container;
use crate::model::User;
use crate::navigation::{NavStack, Navigator, Route};
use crate::ui::categories::CategoryManagerCoordinator;
use crate::ui::detail::DetailCoordinator;
use crate::ui::products::MainCoordinator;

/// Categories per row in the grid.
pub const GRID_COLUMNS: usize = 3;

/// The coordinator behind the visible screen.
pub enum Screen {
    Main(MainCoordinator),
    Detail(DetailCoordinator),
    Categories(CategoryManagerCoordinator),
}

/// UI-side state: the visible screen, its cursor and the quit flag.
///
/// Screen data lives in the view models; `App` only keeps what the terminal
/// needs on top of it.
pub struct App {
    container: Container,
    navigator: Arc<NavStack>,
    route: Route,
    screen: Screen,
    cursor: usize,
    user: Option<User>,
    should_quit: bool,
}

impl App {
    pub fn new(container: Container, navigator: Arc<NavStack>) -> Self {
        let route = navigator.current();
        let screen = build_screen(&container, &navigator, &route);
        let user = container.user_repository().current_user();
        Self {
            container,
            navigator,
            route,
            screen,
            cursor: 0,
            user,
            should_quit: false,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Rebuilds the screen when the navigator moved.
    ///
    /// Dropping the old coordinator drops its view model, which cancels any
    /// fetch it still had running.
    pub fn sync_route(&mut self) {
        let current = self.navigator.current();
        if current == self.route {
            return;
        }
        tracing::debug!(from = %self.route, to = %current, "Switching screen");
        self.screen = build_screen(&self.container, &self.navigator, &current);
        self.route = current;
        self.cursor = 0;
    }

    /// Number of selectable rows/cells on the current screen.
    fn item_count(&self) -> usize {
        match &self.screen {
            Screen::Main(coordinator) => coordinator.state().data().map_or(0, Vec::len),
            Screen::Categories(coordinator) => {
                coordinator.state().categories.data().map_or(0, Vec::len)
            }
            Screen::Detail(_) => 0,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.item_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, count as isize - 1) as usize;
    }

    /// Enter: open the product or pick the category under the cursor.
    pub fn activate(&mut self) {
        match &self.screen {
            Screen::Main(coordinator) => {
                let state = coordinator.state();
                if let Some(product) = state.data().and_then(|p| p.get(self.cursor)) {
                    coordinator.on_product_click(&product.id);
                }
            }
            Screen::Categories(coordinator) => {
                let state = coordinator.state();
                if let Some(category) = state.categories.data().and_then(|c| c.get(self.cursor)) {
                    coordinator.on_category_click(category);
                }
            }
            Screen::Detail(_) => {}
        }
        self.sync_route();
    }

    pub fn retry(&mut self) {
        match &self.screen {
            Screen::Main(coordinator) => coordinator.on_retry(),
            Screen::Detail(coordinator) => coordinator.on_retry(),
            Screen::Categories(coordinator) => coordinator.on_retry_click(),
        }
        self.cursor = 0;
    }

    pub fn back(&mut self) {
        match &self.screen {
            Screen::Main(_) => {}
            Screen::Detail(coordinator) => coordinator.on_back_click(),
            Screen::Categories(coordinator) => coordinator.on_back_click(),
        }
        self.sync_route();
    }

    pub fn open_categories(&mut self) {
        match &self.screen {
            Screen::Main(coordinator) => coordinator.on_categories_click(),
            Screen::Detail(coordinator) => coordinator.on_categories_click(),
            Screen::Categories(_) => {}
        }
        self.sync_route();
    }
}

fn build_screen(container: &Container, navigator: &Arc<NavStack>, route: &Route) -> Screen {
    let navigator: Arc<dyn Navigator> = navigator.clone();
    match route {
        Route::Main => Screen::Main(container.main_coordinator(navigator)),
        Route::Detail { product_id } => {
            Screen::Detail(container.detail_coordinator(product_id, navigator))
        }
        Route::Categories => {
            Screen::Categories(container.category_manager_coordinator(navigator))
        }
    }
}
