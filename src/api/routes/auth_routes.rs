use crate::api::controllers::user_controller::{login, register};
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
