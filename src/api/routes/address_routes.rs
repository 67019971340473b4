use crate::api::controllers::address_controller;
use axum::routing::{delete, get, post, put};
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/", get(address_controller::list_addresses))
        .route("/", post(address_controller::create_address))
        .route("/{id}", get(address_controller::get_address))
        .route("/{id}", put(address_controller::update_address))
        .route("/{id}", delete(address_controller::delete_address))
        .route("/{id}/default", post(address_controller::set_default_address))
}
