use crate::model::Category;
use crate::ui::mvi::{LoadState, UiState};

/// Category grid plus the category picked as catalogue parent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryManagerState {
    pub categories: LoadState<Vec<Category>>,
    /// Survives reloads; only a click changes it.
    pub selected_parent_id: Option<String>,
}

impl UiState for CategoryManagerState {}

impl CategoryManagerState {
    pub fn is_selected(&self, category: &Category) -> bool {
        self.selected_parent_id.as_deref() == Some(category.id.as_str())
    }
}
