use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::PostData;
use crate::inbound::http::router::AppState;

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PostData>>, ApiError> {
    state
        .post_service
        .list_all()
        .await
        .map_err(ApiError::from)
        .map(|posts| {
            ApiSuccess::new(
                StatusCode::OK,
                posts.iter().map(Into::into).collect::<Vec<_>>(),
            )
        })
}
