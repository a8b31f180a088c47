use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::CommentData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn remove_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> Result<ApiSuccess<Vec<CommentData>>, ApiError> {
    let post_id = super::parse_post_id(&post_id)?;
    let comment_id = super::parse_comment_id(&comment_id)?;

    state
        .post_service
        .remove_comment(&post_id, &comment_id, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|comments| {
            ApiSuccess::new(
                StatusCode::OK,
                comments.iter().map(Into::into).collect::<Vec<_>>(),
            )
        })
}
