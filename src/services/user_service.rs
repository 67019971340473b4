use crate::data::models::user::{NewUser, UpdateUser, User};
use crate::data::repos::implementors::user_repo::UserRepo;
use crate::data::repos::traits::repository::Repository;
use crate::security::auth::AuthService;
use crate::security::jwt::JwtService;
use crate::services::errors::UserServiceError;

pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        UserService
    }

    /// Registers a new account and issues an access token in one step.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<(User, String), UserServiceError> {
        let repo = UserRepo::new();

        if repo
            .identity_taken(username, email)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
        {
            return Err(UserServiceError::IdentityTaken);
        }

        let auth = AuthService::new();
        let hashed = auth
            .hash_password(password)
            .await
            .map_err(|_| UserServiceError::HashingFailed)?;

        repo.add(NewUser {
            username,
            email,
            password_hash: &hashed,
            phone,
            role: "user",
        })
        .await
        .map_err(|e| {
            tracing::error!("User insert failed: {}", e);
            UserServiceError::DatabaseError
        })?;

        let user = repo
            .get_by_username(username)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .ok_or(UserServiceError::DatabaseError)?;

        let token = JwtService::new()
            .generate_token(&user)
            .map_err(|_| UserServiceError::TokenCreationFailed)?;

        Ok((user, token))
    }

    /// Login by username or email. The two failure modes (unknown account,
    /// wrong password) collapse into one error on purpose.
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<(User, String), UserServiceError> {
        let repo = UserRepo::new();

        let user = repo
            .get_by_username_or_email(identifier)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .ok_or(UserServiceError::InvalidCredentials)?;

        let auth = AuthService::new();
        let valid = auth
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|_| UserServiceError::InvalidCredentials)?;

        if !valid {
            return Err(UserServiceError::InvalidCredentials);
        }

        let token = JwtService::new()
            .generate_token(&user)
            .map_err(|_| UserServiceError::TokenCreationFailed)?;

        Ok((user, token))
    }

    pub async fn get_profile(&self, user_id: i32) -> Result<User, UserServiceError> {
        let repo = UserRepo::new();

        repo.get_by_id(user_id)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .ok_or(UserServiceError::UserNotFound)
    }

    pub async fn update_profile(
        &self,
        user_id: i32,
        username: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<User, UserServiceError> {
        let repo = UserRepo::new();

        if let Some(new_email) = email {
            if repo
                .email_taken_by_other(new_email, user_id)
                .await
                .map_err(|_| UserServiceError::DatabaseError)?
            {
                return Err(UserServiceError::EmailTaken);
            }
        }

        repo.update(
            user_id,
            UpdateUser {
                username,
                email,
                password_hash: None,
                phone,
                avatar,
            },
        )
        .await
        .map_err(|e| {
            tracing::error!("Profile update failed: {}", e);
            UserServiceError::DatabaseError
        })?;

        repo.get_by_id(user_id)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .ok_or(UserServiceError::UserNotFound)
    }

    /// Changes the password after verifying the current one.
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserServiceError> {
        let repo = UserRepo::new();

        let user = repo
            .get_by_id(user_id)
            .await
            .map_err(|_| UserServiceError::DatabaseError)?
            .ok_or(UserServiceError::UserNotFound)?;

        let auth = AuthService::new();
        let valid = auth
            .verify_password(current_password, &user.password_hash)
            .await
            .map_err(|_| UserServiceError::InvalidCredentials)?;

        if !valid {
            return Err(UserServiceError::InvalidCredentials);
        }

        let hashed = auth
            .hash_password(new_password)
            .await
            .map_err(|_| UserServiceError::HashingFailed)?;

        repo.set_password_hash(user_id, &hashed)
            .await
            .map_err(|_| UserServiceError::DatabaseError)
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
