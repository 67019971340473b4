use crate::api::controllers::order_controller;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/", get(order_controller::get_orders))
        .route("/", post(order_controller::create_order))
        .route("/{id}", get(order_controller::get_order))
        .route("/{id}/cancel", post(order_controller::cancel_order))
        .route("/{id}/pay", post(order_controller::pay_order))
        .route("/{id}/confirm", post(order_controller::confirm_delivery))
}
