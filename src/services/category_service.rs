use crate::data::models::category::Category;
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::ProductServiceError;

pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        CategoryService
    }

    pub async fn get_all_categories(&self) -> Result<Vec<Category>, ProductServiceError> {
        let repo = CategoryRepo::new();
        let categories = repo.get_all_ordered().await.map_err(|e| {
            tracing::error!("Failed to list categories: {}", e);
            ProductServiceError::DatabaseError
        })?;

        Ok(categories.unwrap_or_default())
    }

    pub async fn get_category(&self, category_id: i32) -> Result<Category, ProductServiceError> {
        let repo = CategoryRepo::new();
        repo.get_by_id(category_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::CategoryNotFound)
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
