use crate::api::config::Config;
use crate::data::models::user::User;
use crate::security::errors::AuthError;
use serde::{Deserialize, Serialize};

pub struct JwtService;

impl JwtService {
    pub fn new() -> Self {
        JwtService
    }

    /// Issues an access token carrying the authenticated principal. Handlers
    /// trust these claims without re-reading the users table.
    pub fn generate_token(&self, user: &User) -> Result<String, AuthError> {
        let curr_time = chrono::Utc::now().timestamp() as usize;
        let config = Config::default();

        let claims = AccessClaims {
            sub: user.user_id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            iat: curr_time,
            exp: curr_time + (config.jwt_expiration_minutes * 60) as usize,
        };

        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_ref()),
        )
        .map_err(|_| AuthError::TokenCreationError)
    }

    pub fn decode_token<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, AuthError> {
        let validation = jsonwebtoken::Validation::default();

        let token_data = jsonwebtoken::decode::<T>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(Config::default().jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// Authenticated principal: `{id, username, email, role}` plus the standard
/// issued-at/expiry pair.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
}

impl AccessClaims {
    pub fn user_id(&self) -> i32 {
        self.sub
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
