use super::intent::CategoryManagerIntent;
use super::state::CategoryManagerState;
use crate::model::Category;
use crate::ui::mvi::{LoadReducer, Reducer};

pub struct CategoryManagerReducer;

impl Reducer for CategoryManagerReducer {
    type State = CategoryManagerState;
    type Intent = CategoryManagerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CategoryManagerIntent::Load(load) => CategoryManagerState {
                categories: LoadReducer::<Vec<Category>>::reduce(state.categories, load),
                selected_parent_id: state.selected_parent_id,
            },
            CategoryManagerIntent::Select { category_id } => CategoryManagerState {
                selected_parent_id: Some(category_id),
                ..state
            },
        }
    }
}
