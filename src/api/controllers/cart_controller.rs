use crate::api::controllers::dto::cart_dto::{
    AddCartItemRequest, CartResponse, UpdateCartItemRequest,
};
use crate::security::jwt::AccessClaims;
use crate::services::cart_service::CartService;
use crate::services::errors::CartServiceError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_cart(claims: AccessClaims) -> impl IntoResponse {
    let service = CartService::new();

    match service.get_cart(claims.user_id()).await {
        Ok(rows) => (StatusCode::OK, Json(CartResponse::from(rows))).into_response(),
        Err(e) => {
            tracing::error!("Cart fetch failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch cart").into_response()
        }
    }
}

/// Adding a product already in the cart merges quantities instead of
/// creating a second row.
pub async fn add_to_cart(
    claims: AccessClaims,
    Json(payload): Json<AddCartItemRequest>,
) -> impl IntoResponse {
    let service = CartService::new();

    match service
        .add_item(claims.user_id(), payload.product_id, payload.quantity)
        .await
    {
        Ok(()) => (StatusCode::CREATED, "Item added to cart").into_response(),
        Err(CartServiceError::ProductNotFound) => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        Err(CartServiceError::InvalidQuantity) => {
            (StatusCode::BAD_REQUEST, "Quantity must be positive").into_response()
        }
        Err(CartServiceError::ExceedsStock) => {
            (StatusCode::BAD_REQUEST, "Not enough stock").into_response()
        }
        Err(e) => {
            tracing::error!("Cart add failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to add to cart").into_response()
        }
    }
}

pub async fn update_cart_item(
    claims: AccessClaims,
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> impl IntoResponse {
    let service = CartService::new();

    match service
        .update_quantity(claims.user_id(), product_id, payload.quantity)
        .await
    {
        Ok(()) => (StatusCode::OK, "Cart updated").into_response(),
        Err(CartServiceError::CartItemNotFound) => {
            (StatusCode::NOT_FOUND, "Cart item not found").into_response()
        }
        Err(CartServiceError::ProductNotFound) => {
            (StatusCode::NOT_FOUND, "Product not found").into_response()
        }
        Err(CartServiceError::InvalidQuantity) => {
            (StatusCode::BAD_REQUEST, "Quantity must be positive").into_response()
        }
        Err(CartServiceError::ExceedsStock) => {
            (StatusCode::BAD_REQUEST, "Not enough stock").into_response()
        }
        Err(e) => {
            tracing::error!("Cart update failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update cart").into_response()
        }
    }
}

pub async fn remove_cart_item(
    claims: AccessClaims,
    Path(product_id): Path<i32>,
) -> impl IntoResponse {
    let service = CartService::new();

    match service.remove_item(claims.user_id(), product_id).await {
        Ok(()) => (StatusCode::OK, "Item removed").into_response(),
        Err(CartServiceError::CartItemNotFound) => {
            (StatusCode::NOT_FOUND, "Cart item not found").into_response()
        }
        Err(e) => {
            tracing::error!("Cart removal failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to remove item").into_response()
        }
    }
}

pub async fn clear_cart(claims: AccessClaims) -> impl IntoResponse {
    let service = CartService::new();

    match service.clear_cart(claims.user_id()).await {
        Ok(()) => (StatusCode::OK, "Cart cleared").into_response(),
        Err(e) => {
            tracing::error!("Cart clear failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to clear cart").into_response()
        }
    }
}
