use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Request-level failures surfaced before a handler runs.
#[derive(Debug)]
pub enum APIErrors {
    Unauthorized,
    Forbidden,
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            APIErrors::Unauthorized => (StatusCode::UNAUTHORIZED, "Authentication required"),
            APIErrors::Forbidden => (StatusCode::FORBIDDEN, "Admin privileges required"),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
