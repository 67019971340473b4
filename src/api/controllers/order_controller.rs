use crate::api::controllers::dto::order_dto::{
    CreateOrderRequest, CreatedOrderResponse, OrderResponse,
};
use crate::security::jwt::AccessClaims;
use crate::services::errors::OrderServiceError;
use crate::services::order_service::OrderService;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Checkout. The whole request succeeds or fails as one transaction;
/// a single missing product or short stock line rolls everything back.
pub async fn create_order(
    claims: AccessClaims,
    Json(payload): Json<CreateOrderRequest>,
) -> impl IntoResponse {
    let service = OrderService::new();

    let lines: Vec<(i32, i32)> = payload
        .items
        .iter()
        .map(|line| (line.product_id, line.quantity))
        .collect();

    match service
        .create_order(
            claims.user_id(),
            &payload.shipping_address,
            payload.payment_method.as_deref(),
            &lines,
        )
        .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(CreatedOrderResponse::from(created)),
        )
            .into_response(),
        Err(OrderServiceError::EmptyOrder) => {
            (StatusCode::BAD_REQUEST, "Order has no items").into_response()
        }
        Err(OrderServiceError::MissingShippingAddress) => {
            (StatusCode::BAD_REQUEST, "Shipping address is required").into_response()
        }
        Err(OrderServiceError::InvalidQuantity) => {
            (StatusCode::BAD_REQUEST, "Quantity must be positive").into_response()
        }
        Err(OrderServiceError::ProductNotFound(id)) => {
            (StatusCode::BAD_REQUEST, format!("Product {} not found", id)).into_response()
        }
        Err(OrderServiceError::InsufficientStock(id)) => (
            StatusCode::BAD_REQUEST,
            format!("Insufficient stock for product {}", id),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Checkout failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create order").into_response()
        }
    }
}

pub async fn get_orders(claims: AccessClaims) -> impl IntoResponse {
    let service = OrderService::new();

    match service.get_user_orders(claims.user_id()).await {
        Ok(orders) => {
            let response: Vec<OrderResponse> =
                orders.into_iter().map(OrderResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Order listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch orders").into_response()
        }
    }
}

pub async fn get_order(claims: AccessClaims, Path(order_id): Path<i32>) -> impl IntoResponse {
    let service = OrderService::new();

    match service.get_order(order_id, claims.user_id()).await {
        Ok(order) => (StatusCode::OK, Json(OrderResponse::from(order))).into_response(),
        Err(OrderServiceError::OrderNotFound) => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        Err(e) => {
            tracing::error!("Order fetch failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch order").into_response()
        }
    }
}

/// Cancel a pending order, restoring stock for every line.
pub async fn cancel_order(claims: AccessClaims, Path(order_id): Path<i32>) -> impl IntoResponse {
    let service = OrderService::new();

    match service.cancel_order(order_id, claims.user_id()).await {
        Ok(()) => (StatusCode::OK, "Order cancelled").into_response(),
        Err(OrderServiceError::OrderNotFound) => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        Err(OrderServiceError::InvalidStatusTransition) => {
            (StatusCode::BAD_REQUEST, "Only pending orders can be cancelled").into_response()
        }
        Err(e) => {
            tracing::error!("Order cancellation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to cancel order").into_response()
        }
    }
}

/// Simulated payment: marks the order paid and clears the user's cart.
pub async fn pay_order(claims: AccessClaims, Path(order_id): Path<i32>) -> impl IntoResponse {
    let service = OrderService::new();

    match service.pay_order(order_id, claims.user_id()).await {
        Ok(()) => (StatusCode::OK, "Payment successful").into_response(),
        Err(OrderServiceError::OrderNotFound) => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        Err(OrderServiceError::InvalidStatusTransition) => {
            (StatusCode::BAD_REQUEST, "Only pending orders can be paid").into_response()
        }
        Err(e) => {
            tracing::error!("Payment failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to pay order").into_response()
        }
    }
}

/// Buyer confirms receipt of a shipped order.
pub async fn confirm_delivery(
    claims: AccessClaims,
    Path(order_id): Path<i32>,
) -> impl IntoResponse {
    let service = OrderService::new();

    match service.confirm_delivery(order_id, claims.user_id()).await {
        Ok(()) => (StatusCode::OK, "Delivery confirmed").into_response(),
        Err(OrderServiceError::OrderNotFound) => {
            (StatusCode::NOT_FOUND, "Order not found").into_response()
        }
        Err(OrderServiceError::InvalidStatusTransition) => {
            (StatusCode::BAD_REQUEST, "Only shipped orders can be confirmed").into_response()
        }
        Err(e) => {
            tracing::error!("Delivery confirmation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to confirm delivery").into_response()
        }
    }
}
