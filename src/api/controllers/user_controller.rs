use crate::api::controllers::dto::user_dto::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
    UserResponse,
};
use crate::security::jwt::AccessClaims;
use crate::services::errors::UserServiceError;
use crate::services::user_service::UserService;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn register(Json(payload): Json<RegisterRequest>) -> impl IntoResponse {
    let service = UserService::new();

    match service
        .register(
            &payload.username,
            &payload.email,
            &payload.password,
            payload.phone.as_deref(),
        )
        .await
    {
        Ok((user, token)) => (
            StatusCode::CREATED,
            Json(AuthResponse {
                message: "Registration successful".to_string(),
                user: UserResponse::from(user),
                token,
            }),
        )
            .into_response(),
        Err(UserServiceError::IdentityTaken) => {
            (StatusCode::BAD_REQUEST, "Username already taken").into_response()
        }
        Err(UserServiceError::EmailTaken) => {
            (StatusCode::BAD_REQUEST, "Email already registered").into_response()
        }
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to register").into_response()
        }
    }
}

pub async fn login(Json(payload): Json<LoginRequest>) -> impl IntoResponse {
    let service = UserService::new();

    match service.login(&payload.username, &payload.password).await {
        Ok((user, token)) => (
            StatusCode::OK,
            Json(AuthResponse {
                message: "Login successful".to_string(),
                user: UserResponse::from(user),
                token,
            }),
        )
            .into_response(),
        Err(UserServiceError::InvalidCredentials) => {
            (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
        }
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to log in").into_response()
        }
    }
}

pub async fn get_profile(claims: AccessClaims) -> impl IntoResponse {
    let service = UserService::new();

    match service.get_profile(claims.user_id()).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(UserServiceError::UserNotFound) => {
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
        Err(e) => {
            tracing::error!("Profile fetch failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch profile").into_response()
        }
    }
}

pub async fn update_profile(
    claims: AccessClaims,
    Json(payload): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    let service = UserService::new();

    match service
        .update_profile(
            claims.user_id(),
            payload.username.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.avatar.as_deref(),
        )
        .await
    {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(user))).into_response(),
        Err(UserServiceError::EmailTaken) => {
            (StatusCode::BAD_REQUEST, "Email already registered").into_response()
        }
        Err(UserServiceError::UserNotFound) => {
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
        Err(e) => {
            tracing::error!("Profile update failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update profile").into_response()
        }
    }
}

pub async fn change_password(
    claims: AccessClaims,
    Json(payload): Json<ChangePasswordRequest>,
) -> impl IntoResponse {
    let service = UserService::new();

    match service
        .change_password(
            claims.user_id(),
            &payload.current_password,
            &payload.new_password,
        )
        .await
    {
        Ok(()) => (StatusCode::OK, "Password changed").into_response(),
        Err(UserServiceError::InvalidCredentials) => {
            (StatusCode::BAD_REQUEST, "Current password is incorrect").into_response()
        }
        Err(UserServiceError::UserNotFound) => {
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
        Err(e) => {
            tracing::error!("Password change failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to change password").into_response()
        }
    }
}
