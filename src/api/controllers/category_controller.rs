use crate::api::controllers::dto::category_dto::CategoryResponse;
use crate::services::category_service::CategoryService;
use crate::services::errors::ProductServiceError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_categories() -> impl IntoResponse {
    let service = CategoryService::new();

    match service.get_all_categories().await {
        Ok(categories) => {
            let response: Vec<CategoryResponse> = categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Category listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch categories").into_response()
        }
    }
}

pub async fn get_category(Path(category_id): Path<i32>) -> impl IntoResponse {
    let service = CategoryService::new();

    match service.get_category(category_id).await {
        Ok(category) => (StatusCode::OK, Json(CategoryResponse::from(category))).into_response(),
        Err(ProductServiceError::CategoryNotFound) => {
            (StatusCode::NOT_FOUND, "Category not found").into_response()
        }
        Err(e) => {
            tracing::error!("Category fetch failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch category").into_response()
        }
    }
}
