use crate::data::models::category::Category;
use serde::Serialize;

#[derive(Serialize)]
pub struct CategoryResponse {
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub sort_order: i32,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            name: category.name,
            description: category.description,
            image: category.image,
            sort_order: category.sort_order,
        }
    }
}
