use crate::api::controllers::dto::banner_dto::BannerResponse;
use crate::services::banner_service::BannerService;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_banners() -> impl IntoResponse {
    let service = BannerService::new();

    match service.get_active_banners().await {
        Ok(banners) => {
            let response: Vec<BannerResponse> =
                banners.into_iter().map(BannerResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Banner listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch banners").into_response()
        }
    }
}
