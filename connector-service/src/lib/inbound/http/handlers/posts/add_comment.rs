use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::post::models::AddCommentCommand;
use crate::domain::post::models::PostText;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::CommentData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
    Json(body): Json<AddCommentRequest>,
) -> Result<ApiSuccess<Vec<CommentData>>, ApiError> {
    let post_id = super::parse_post_id(&post_id)?;

    let text = PostText::new(body.text).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = AddCommentCommand {
        post_id,
        user_id: auth_user.user_id,
        text,
    };

    state
        .post_service
        .add_comment(command)
        .await
        .map_err(ApiError::from)
        .map(|comments| {
            ApiSuccess::new(
                StatusCode::CREATED,
                comments.iter().map(Into::into).collect::<Vec<_>>(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddCommentRequest {
    text: String,
}
