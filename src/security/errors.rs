#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    HashingError,
    VerificationError,
    TokenCreationError,
    InvalidToken,
}

impl std::error::Error for AuthError {}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::HashingError => write!(f, "Could not hash the password"),
            AuthError::VerificationError => write!(f, "Could not verify the password"),
            AuthError::TokenCreationError => write!(f, "Could not issue an access token"),
            AuthError::InvalidToken => write!(f, "Access token is invalid or expired"),
        }
    }
}
