use crate::api::controllers::category_controller;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/", get(category_controller::get_categories))
        .route("/{id}", get(category_controller::get_category))
}
