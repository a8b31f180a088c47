use thiserror::Error;

use crate::user::errors::UserError;

/// Top-level error for all profile-related operations
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("There is no profile for this user")]
    NotFound,

    #[error("User error: {0}")]
    User(#[from] UserError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ProfileError {
    fn from(err: anyhow::Error) -> Self {
        ProfileError::Unknown(err.to_string())
    }
}
