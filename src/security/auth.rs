use crate::security::errors::AuthError;
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use tokio::task;

/// Argon2 password handling for store accounts. The KDF runs on the blocking
/// pool so request workers are never stalled on it.
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        AuthService
    }

    /// Hashes a new account password with a fresh salt.
    pub async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_owned();

        task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);

            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| AuthError::HashingError)
        })
        .await
        .map_err(|_| AuthError::HashingError)?
    }

    /// Checks a login attempt against the stored hash. A wrong password is
    /// `Ok(false)`; a stored hash that fails to parse is an error.
    pub async fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, AuthError> {
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();

        task::spawn_blocking(move || {
            let parsed = argon2::password_hash::PasswordHash::new(&stored_hash)
                .map_err(|_| AuthError::VerificationError)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(_) => Err(AuthError::VerificationError),
            }
        })
        .await
        .map_err(|_| AuthError::VerificationError)?
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
