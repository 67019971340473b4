use crate::api::controllers::dto::address_dto::{AddressRequest, AddressResponse};
use crate::security::jwt::AccessClaims;
use crate::services::address_service::{AddressForm, AddressService};
use crate::services::errors::AddressServiceError;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn list_addresses(claims: AccessClaims) -> impl IntoResponse {
    let service = AddressService::new();

    match service.list_addresses(claims.user_id()).await {
        Ok(addresses) => {
            let response: Vec<AddressResponse> =
                addresses.into_iter().map(AddressResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("Address listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch addresses").into_response()
        }
    }
}

pub async fn get_address(
    claims: AccessClaims,
    Path(address_id): Path<i32>,
) -> impl IntoResponse {
    let service = AddressService::new();

    match service.get_address(address_id, claims.user_id()).await {
        Ok(address) => (StatusCode::OK, Json(AddressResponse::from(address))).into_response(),
        Err(AddressServiceError::AddressNotFound) => {
            (StatusCode::NOT_FOUND, "Address not found").into_response()
        }
        Err(e) => {
            tracing::error!("Address fetch failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch address").into_response()
        }
    }
}

pub async fn create_address(
    claims: AccessClaims,
    Json(payload): Json<AddressRequest>,
) -> impl IntoResponse {
    let service = AddressService::new();

    match service
        .create_address(claims.user_id(), &AddressForm::from(&payload))
        .await
    {
        Ok(()) => (StatusCode::CREATED, "Address created").into_response(),
        Err(AddressServiceError::IncompleteAddress) => {
            (StatusCode::BAD_REQUEST, "All address fields are required").into_response()
        }
        Err(e) => {
            tracing::error!("Address creation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create address").into_response()
        }
    }
}

pub async fn update_address(
    claims: AccessClaims,
    Path(address_id): Path<i32>,
    Json(payload): Json<AddressRequest>,
) -> impl IntoResponse {
    let service = AddressService::new();

    match service
        .update_address(address_id, claims.user_id(), &AddressForm::from(&payload))
        .await
    {
        Ok(()) => (StatusCode::OK, "Address updated").into_response(),
        Err(AddressServiceError::AddressNotFound) => {
            (StatusCode::NOT_FOUND, "Address not found").into_response()
        }
        Err(AddressServiceError::IncompleteAddress) => {
            (StatusCode::BAD_REQUEST, "All address fields are required").into_response()
        }
        Err(e) => {
            tracing::error!("Address update failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update address").into_response()
        }
    }
}

pub async fn delete_address(
    claims: AccessClaims,
    Path(address_id): Path<i32>,
) -> impl IntoResponse {
    let service = AddressService::new();

    match service.delete_address(address_id, claims.user_id()).await {
        Ok(()) => (StatusCode::OK, "Address deleted").into_response(),
        Err(AddressServiceError::AddressNotFound) => {
            (StatusCode::NOT_FOUND, "Address not found").into_response()
        }
        Err(e) => {
            tracing::error!("Address deletion failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete address").into_response()
        }
    }
}

pub async fn set_default_address(
    claims: AccessClaims,
    Path(address_id): Path<i32>,
) -> impl IntoResponse {
    let service = AddressService::new();

    match service.set_default(address_id, claims.user_id()).await {
        Ok(()) => (StatusCode::OK, "Default address set").into_response(),
        Err(AddressServiceError::AddressNotFound) => {
            (StatusCode::NOT_FOUND, "Address not found").into_response()
        }
        Err(e) => {
            tracing::error!("Setting default address failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to set default address").into_response()
        }
    }
}
