use async_trait::async_trait;

use crate::domain::post::models::AddCommentCommand;
use crate::domain::post::models::Comment;
use crate::domain::post::models::CommentId;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Like;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post, capturing the author's current name and avatar.
    ///
    /// # Errors
    /// * `User(NotFound)` - Author record no longer exists (stale token)
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreatePostCommand) -> Result<Post, PostError>;

    /// List all posts, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Retrieve a post by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, id: &PostId) -> Result<Post, PostError>;

    /// Delete a post; only its owner may do so.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `NotPostOwner` - Requester does not own the post
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &PostId, requester: &UserId) -> Result<(), PostError>;

    /// Add the user to the post's like set.
    ///
    /// At most one like per user per post: membership is checked before
    /// the insert.
    ///
    /// # Returns
    /// The updated like set
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `AlreadyLiked` - User already liked this post
    /// * `DatabaseError` - Database operation failed
    async fn like(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError>;

    /// Remove the user from the post's like set.
    ///
    /// # Returns
    /// The updated like set
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `NotYetLiked` - User has not liked this post
    /// * `DatabaseError` - Database operation failed
    async fn unlike(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError>;

    /// Prepend a comment with the commenter's snapshot name/avatar.
    ///
    /// # Returns
    /// The updated comment list, newest first
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `User(NotFound)` - Commenter record no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn add_comment(&self, command: AddCommentCommand) -> Result<Vec<Comment>, PostError>;

    /// Remove a comment by identifier; only the comment's owner may do so.
    ///
    /// # Returns
    /// The updated comment list, newest first
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `CommentNotFound` - No comment with this id on the post
    /// * `NotCommentOwner` - Requester does not own the comment
    /// * `DatabaseError` - Database operation failed
    async fn remove_comment(
        &self,
        id: &PostId,
        comment_id: &CommentId,
        requester: &UserId,
    ) -> Result<Vec<Comment>, PostError>;
}

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    /// Retrieve a post (with likes and comments) by identifier.
    ///
    /// # Returns
    /// Optional post (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve all posts (with likes and comments), newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Remove a post; likes and comments go with it.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;

    /// Insert a like row.
    ///
    /// The store's composite key turns a concurrent duplicate insert
    /// into `AlreadyLiked` instead of a second row.
    ///
    /// # Returns
    /// The updated like set
    ///
    /// # Errors
    /// * `AlreadyLiked` - Like row already present
    /// * `DatabaseError` - Database operation failed
    async fn add_like(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError>;

    /// Remove a like row.
    ///
    /// # Returns
    /// The updated like set
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn remove_like(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError>;

    /// Insert a comment row.
    ///
    /// # Returns
    /// The updated comment list, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn add_comment(&self, id: &PostId, comment: Comment) -> Result<Vec<Comment>, PostError>;

    /// Remove a comment row by identifier.
    ///
    /// # Returns
    /// The updated comment list, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn remove_comment(
        &self,
        id: &PostId,
        comment_id: &CommentId,
    ) -> Result<Vec<Comment>, PostError>;
}
