use crate::api::controllers::cart_controller;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/", get(cart_controller::get_cart))
        .route("/", post(cart_controller::add_to_cart))
        .route("/", delete(cart_controller::clear_cart))
        .route("/{product_id}", put(cart_controller::update_cart_item))
        .route("/{product_id}", delete(cart_controller::remove_cart_item))
}
