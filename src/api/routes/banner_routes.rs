use crate::api::controllers::banner_controller;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<()> {
    Router::new().route("/", get(banner_controller::get_banners))
}
