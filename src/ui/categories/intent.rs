use crate::model::Category;
use crate::repository::FetchError;
use crate::ui::mvi::{Intent, LoadIntent, Loadable};

#[derive(Debug)]
pub enum CategoryManagerIntent {
    Load(LoadIntent<Vec<Category>>),
    /// Category clicked: becomes the catalogue parent. No reload.
    Select { category_id: String },
}

impl Intent for CategoryManagerIntent {}

impl Loadable for CategoryManagerIntent {
    type Data = Vec<Category>;

    fn started() -> Self {
        CategoryManagerIntent::Load(LoadIntent::Started)
    }

    fn resolved(result: Result<Vec<Category>, FetchError>) -> Self {
        CategoryManagerIntent::Load(LoadIntent::Resolved(result))
    }
}
