use crate::api::controllers::dto::product_dto::{
    ProductPageResponse, ProductQueryParams, ProductResponse,
};
use crate::data::repos::implementors::product_repo::ProductQuery;
use crate::services::errors::ProductServiceError;
use crate::services::product_service::ProductService;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Storefront catalog listing with filters, sorting and pagination.
pub async fn list_products(Query(params): Query<ProductQueryParams>) -> impl IntoResponse {
    let service = ProductService::new();
    let query = ProductQuery::from(params);

    match service.search_products(&query).await {
        Ok(page) => (StatusCode::OK, Json(ProductPageResponse::from(page))).into_response(),
        Err(e) => {
            tracing::error!("Catalog listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch products").into_response()
        }
    }
}

/// Product detail. Inactive products 404 here.
pub async fn get_product(Path(product_id): Path<i32>) -> impl IntoResponse {
    let service = ProductService::new();

    match service.get_product(product_id).await {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(ProductServiceError::ProductNotFound) => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        Err(e) => {
            tracing::error!("Product fetch failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch product").into_response()
        }
    }
}
