use crate::api::controllers::dto::admin_dto::{
    AdminListParams, AdminOrderResponse, DashboardResponse, PaginatedResponse,
    SetOrderStatusRequest,
};
use crate::api::controllers::dto::product_dto::{
    CreateProductRequest, ProductResponse, UpdateProductRequest,
};
use crate::api::controllers::dto::user_dto::UserResponse;
use crate::api::extractors::AdminClaims;
use crate::data::models::product::{NewProduct, UpdateProduct};
use crate::services::admin_service::AdminService;
use crate::services::errors::{AdminServiceError, ProductServiceError};
use crate::services::product_service::ProductService;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn dashboard(AdminClaims(_): AdminClaims) -> impl IntoResponse {
    let service = AdminService::new();

    match service.dashboard().await {
        Ok(stats) => (StatusCode::OK, Json(DashboardResponse::from(stats))).into_response(),
        Err(e) => {
            tracing::error!("Dashboard aggregation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch dashboard").into_response()
        }
    }
}

pub async fn list_users(
    AdminClaims(_): AdminClaims,
    Query(params): Query<AdminListParams>,
) -> impl IntoResponse {
    let service = AdminService::new();

    match service
        .list_users(params.search.as_deref(), params.page(), params.per_page())
        .await
    {
        Ok(page) => (
            StatusCode::OK,
            Json(PaginatedResponse::<UserResponse>::from(page)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Admin user listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch users").into_response()
        }
    }
}

pub async fn delete_user(
    AdminClaims(_): AdminClaims,
    Path(user_id): Path<i32>,
) -> impl IntoResponse {
    let service = AdminService::new();

    match service.delete_user(user_id).await {
        Ok(()) => (StatusCode::OK, "User deleted").into_response(),
        Err(AdminServiceError::UserNotFound) => {
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
        Err(AdminServiceError::CannotDeleteAdmin) => {
            (StatusCode::FORBIDDEN, "Admin accounts cannot be deleted").into_response()
        }
        Err(e) => {
            tracing::error!("User deletion failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete user").into_response()
        }
    }
}

pub async fn list_products(
    AdminClaims(_): AdminClaims,
    Query(params): Query<AdminListParams>,
) -> impl IntoResponse {
    let service = AdminService::new();

    match service
        .list_products(
            params.search.as_deref(),
            params.category_id,
            params.page(),
            params.per_page(),
        )
        .await
    {
        Ok(page) => (
            StatusCode::OK,
            Json(PaginatedResponse::<ProductResponse>::from(page)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Admin product listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch products").into_response()
        }
    }
}

pub async fn get_product(
    AdminClaims(_): AdminClaims,
    Path(product_id): Path<i32>,
) -> impl IntoResponse {
    let service = ProductService::new();

    // Admins see products in any status.
    match service.get_product_any_status(product_id).await {
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

pub async fn create_product(
    AdminClaims(_): AdminClaims,
    Json(payload): Json<CreateProductRequest>,
) -> impl IntoResponse {
    let service = ProductService::new();

    match service.create_product(NewProduct::from(&payload)).await {
        Ok(()) => (StatusCode::CREATED, "Product created").into_response(),
        Err(ProductServiceError::MissingRequiredFields) => {
            (StatusCode::BAD_REQUEST, "Product name is required").into_response()
        }
        Err(e) => {
            tracing::error!("Product creation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create product").into_response()
        }
    }
}

pub async fn update_product(
    AdminClaims(_): AdminClaims,
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> impl IntoResponse {
    let service = ProductService::new();

    match service
        .update_product(product_id, UpdateProduct::from(&payload))
        .await
    {
        Ok(()) => (StatusCode::OK, "Product updated").into_response(),
        Err(ProductServiceError::ProductNotFound) => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        Err(e) => {
            tracing::error!("Product update failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update product").into_response()
        }
    }
}

pub async fn delete_product(
    AdminClaims(_): AdminClaims,
    Path(product_id): Path<i32>,
) -> impl IntoResponse {
    let service = ProductService::new();

    match service.delete_product(product_id).await {
        Ok(()) => (StatusCode::OK, "Product deleted").into_response(),
        Err(ProductServiceError::ProductNotFound) => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        Err(e) => {
            tracing::error!("Product deletion failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete product").into_response()
        }
    }
}

pub async fn list_orders(
    AdminClaims(_): AdminClaims,
    Query(params): Query<AdminListParams>,
) -> impl IntoResponse {
    let service = AdminService::new();

    match service
        .list_orders(
            params.status.as_deref(),
            params.search.as_deref(),
            params.page(),
            params.per_page(),
        )
        .await
    {
        Ok(page) => (
            StatusCode::OK,
            Json(PaginatedResponse::<AdminOrderResponse>::from(page)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Admin order listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch orders").into_response()
        }
    }
}

/// Status override that bypasses the transition rules. Stock is never
/// adjusted here, so overriding a pending order to cancelled will not
/// restock it.
pub async fn set_order_status(
    AdminClaims(_): AdminClaims,
    Path(order_id): Path<i32>,
    Json(payload): Json<SetOrderStatusRequest>,
) -> impl IntoResponse {
    let service = AdminService::new();

    match service.set_order_status(order_id, &payload.status).await {
        Ok(()) => (StatusCode::OK, "Order status updated").into_response(),
        Err(AdminServiceError::OrderNotFound) => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        Err(AdminServiceError::InvalidStatus) => {
            (StatusCode::BAD_REQUEST, "Unknown order status").into_response()
        }
        Err(e) => {
            tracing::error!("Order status override failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update order").into_response()
        }
    }
}
