use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::LikeData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn unlike_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(post_id): Path<String>,
) -> Result<ApiSuccess<Vec<LikeData>>, ApiError> {
    let post_id = super::parse_post_id(&post_id)?;

    state
        .post_service
        .unlike(&post_id, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|likes| {
            ApiSuccess::new(
                StatusCode::OK,
                likes.iter().map(Into::into).collect::<Vec<_>>(),
            )
        })
}
