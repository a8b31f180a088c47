use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;
use crate::post::errors::CommentIdError;
use crate::post::errors::PostIdError;
use crate::post::errors::PostTextError;

/// Post aggregate entity.
///
/// Carries the author's name and avatar as a snapshot taken at creation
/// time; later profile edits do not update existing posts. Likes are a
/// set (one per user), comments are ordered newest-first.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub name: String,
    pub avatar: String,
    pub text: PostText,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Whether the given user is already in the like set.
    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.iter().any(|like| like.user_id == *user_id)
    }

    /// Find a comment by its identifier.
    pub fn comment(&self, comment_id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == *comment_id)
    }
}

/// Post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Generate a new random post ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new random comment ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a comment ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Text body of a post or comment.
///
/// Must contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    /// Create a validated text body.
    ///
    /// # Errors
    /// * `Empty` - Text is empty or whitespace only
    pub fn new(text: String) -> Result<Self, PostTextError> {
        if text.trim().is_empty() {
            return Err(PostTextError::Empty);
        }
        Ok(Self(text))
    }

    /// Get text as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single like: one user reference, unique per post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Like {
    pub user_id: UserId,
}

/// A comment on a post, with the commenter's snapshot name/avatar.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub name: String,
    pub avatar: String,
    pub text: PostText,
    pub created_at: DateTime<Utc>,
}

/// Command to create a new post.
#[derive(Debug)]
pub struct CreatePostCommand {
    pub user_id: UserId,
    pub text: PostText,
}

/// Command to add a comment to a post.
#[derive(Debug)]
pub struct AddCommentCommand {
    pub post_id: PostId,
    pub user_id: UserId,
    pub text: PostText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_text_rejects_empty() {
        assert!(PostText::new("".to_string()).is_err());
        assert!(PostText::new("   \n".to_string()).is_err());
        assert!(PostText::new("hello".to_string()).is_ok());
    }

    #[test]
    fn test_post_id_from_invalid_string() {
        assert!(PostId::from_string("12345").is_err());
    }

    #[test]
    fn test_is_liked_by() {
        let liker = UserId::new();
        let post = Post {
            id: PostId::new(),
            user_id: UserId::new(),
            name: "Alice".to_string(),
            avatar: "avatar".to_string(),
            text: PostText::new("hello".to_string()).unwrap(),
            likes: vec![Like { user_id: liker }],
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
        };

        assert!(post.is_liked_by(&liker));
        assert!(!post.is_liked_by(&UserId::new()));
    }
}
