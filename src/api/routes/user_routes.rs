use crate::api::controllers::user_controller;
use axum::routing::{get, post, put};
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/profile", get(user_controller::get_profile))
        .route("/profile", put(user_controller::update_profile))
        .route("/password", post(user_controller::change_password))
}
