use crate::data::models::product::{NewProduct, Product, UpdateProduct};
use crate::data::repos::implementors::product_repo::{ProductQuery, ProductRepo};
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::ProductServiceError;

/// One page of catalog results plus pagination metadata.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        ProductService
    }

    /// Storefront catalog read path: active products only, parameterized
    /// filtering, no caching layer.
    pub async fn search_products(
        &self,
        query: &ProductQuery,
    ) -> Result<ProductPage, ProductServiceError> {
        let repo = ProductRepo::new();
        let (items, total) = repo.search(query).await.map_err(|e| {
            tracing::error!("Catalog query failed: {}", e);
            ProductServiceError::DatabaseError
        })?;

        let per_page = query.per_page();
        Ok(ProductPage {
            items,
            current_page: query.page(),
            per_page,
            total,
            total_pages: (total + per_page - 1) / per_page,
        })
    }

    /// Detail fetch for the storefront; bumps the view counter. Inactive
    /// products are hidden here but remain visible to admins.
    pub async fn get_product(&self, product_id: i32) -> Result<Product, ProductServiceError> {
        let repo = ProductRepo::new();

        let product = repo
            .get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .filter(|p| p.status == "active")
            .ok_or(ProductServiceError::ProductNotFound)?;

        if let Err(e) = repo.increment_views(product_id).await {
            tracing::warn!("Failed to bump views for product {}: {}", product_id, e);
        }

        Ok(product)
    }

    pub async fn create_product(
        &self,
        item: NewProduct<'_>,
    ) -> Result<(), ProductServiceError> {
        if item.name.trim().is_empty() {
            return Err(ProductServiceError::MissingRequiredFields);
        }

        let repo = ProductRepo::new();
        repo.add(item).await.map_err(|e| {
            tracing::error!("Product creation failed: {}", e);
            ProductServiceError::ProductCreationFailed
        })
    }

    pub async fn update_product(
        &self,
        product_id: i32,
        form: UpdateProduct<'_>,
    ) -> Result<(), ProductServiceError> {
        let repo = ProductRepo::new();

        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)?;

        repo.update(product_id, form).await.map_err(|e| {
            tracing::error!("Product update failed: {}", e);
            ProductServiceError::ProductUpdateFailed
        })
    }

    pub async fn delete_product(&self, product_id: i32) -> Result<(), ProductServiceError> {
        let repo = ProductRepo::new();

        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)?;

        repo.delete(product_id).await.map_err(|e| {
            tracing::error!("Product deletion failed: {}", e);
            ProductServiceError::ProductDeletionFailed
        })
    }

    pub async fn get_product_any_status(
        &self,
        product_id: i32,
    ) -> Result<Product, ProductServiceError> {
        let repo = ProductRepo::new();

        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
