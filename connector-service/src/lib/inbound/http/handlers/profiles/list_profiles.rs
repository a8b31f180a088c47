use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::profile::ports::ProfileServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::ProfileWithOwnerData;
use crate::inbound::http::router::AppState;

pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ProfileWithOwnerData>>, ApiError> {
    state
        .profile_service
        .list_all()
        .await
        .map_err(ApiError::from)
        .map(|profiles| {
            ApiSuccess::new(
                StatusCode::OK,
                profiles.iter().map(Into::into).collect::<Vec<_>>(),
            )
        })
}
