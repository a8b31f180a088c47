use crate::domain::post::errors::PostError;
use crate::domain::post::models::CommentId;
use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;

pub mod add_comment;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod like_post;
pub mod list_posts;
pub mod remove_comment;
pub mod unlike_post;

pub use add_comment::add_comment;
pub use create_post::create_post;
pub use delete_post::delete_post;
pub use get_post::get_post;
pub use like_post::like_post;
pub use list_posts::list_posts;
pub use remove_comment::remove_comment;
pub use unlike_post::unlike_post;

/// A malformed id can never match a post, so it reads as absent.
fn parse_post_id(raw: &str) -> Result<PostId, ApiError> {
    PostId::from_string(raw).map_err(|_| ApiError::NotFound(PostError::NotFound.to_string()))
}

fn parse_comment_id(raw: &str) -> Result<CommentId, ApiError> {
    CommentId::from_string(raw)
        .map_err(|_| ApiError::NotFound(PostError::CommentNotFound.to_string()))
}
