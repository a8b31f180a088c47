use thiserror::Error;

use crate::user::errors::UserError;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for text body validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTextError {
    #[error("Text is required")]
    Empty,
}

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid text: {0}")]
    InvalidText(#[from] PostTextError),

    #[error("Post not found")]
    NotFound,

    #[error("Comment does not exist")]
    CommentNotFound,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotYetLiked,

    /// Requester is authenticated but does not own the post.
    #[error("User not authorized")]
    NotPostOwner,

    /// Requester is authenticated but does not own the comment.
    #[error("User not authorized")]
    NotCommentOwner,

    #[error("User error: {0}")]
    User(#[from] UserError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PostError {
    fn from(err: anyhow::Error) -> Self {
        PostError::Unknown(err.to_string())
    }
}
