use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::ports::ProfileServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::ProfileData;
use crate::inbound::http::router::AppState;

pub async fn get_profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    // A malformed id can never match a profile, so it reads as absent
    // rather than as a client syntax error
    let user_id = UserId::from_string(&user_id)
        .map_err(|_| ApiError::NotFound(ProfileError::NotFound.to_string()))?;

    state
        .profile_service
        .get_by_owner(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}
