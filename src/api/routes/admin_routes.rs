use crate::api::controllers::admin_controller;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/dashboard", get(admin_controller::dashboard))
        .route("/users", get(admin_controller::list_users))
        .route("/users/{id}", delete(admin_controller::delete_user))
        .route("/products", get(admin_controller::list_products))
        .route("/products", post(admin_controller::create_product))
        .route("/products/{id}", get(admin_controller::get_product))
        .route("/products/{id}", put(admin_controller::update_product))
        .route("/products/{id}", delete(admin_controller::delete_product))
        .route("/orders", get(admin_controller::list_orders))
        .route("/orders/{id}/status", put(admin_controller::set_order_status))
}
