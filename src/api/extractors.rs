use crate::api::errors::APIErrors;
use crate::security::jwt::{AccessClaims, JwtService};
use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

impl FromRequestParts<()> for AccessClaims {
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        decode_token_from_request_parts(parts).await
    }
}

async fn decode_token_from_request_parts(parts: &mut Parts) -> Result<AccessClaims, APIErrors> {
    let tokenizer = JwtService::new();

    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| {
            tracing::error!("Invalid authorization header");
            APIErrors::Unauthorized
        })?;

    let claims = tokenizer
        .decode_token::<AccessClaims>(bearer.token())
        .map_err(|e| {
            tracing::error!("Token decoding error: {:?}", e);
            APIErrors::Unauthorized
        })?;

    Ok(claims)
}

/// Claims wrapper that additionally requires the admin role.
pub struct AdminClaims(pub AccessClaims);

impl FromRequestParts<()> for AdminClaims {
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let claims = AccessClaims::from_request_parts(parts, state).await?;

        if !claims.is_admin() {
            return Err(APIErrors::Forbidden);
        }

        Ok(AdminClaims(claims))
    }
}
