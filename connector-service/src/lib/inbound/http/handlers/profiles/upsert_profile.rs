use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::profile::models::Profile;
use crate::domain::profile::models::UpsertProfileCommand;
use crate::domain::profile::ports::ProfileServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::ProfileData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn upsert_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<UpsertProfileRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .profile_service
        .upsert(&auth_user.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

/// HTTP request body for creating or updating a profile (raw JSON).
///
/// Skills arrive as one comma-separated string, matching the form field
/// clients submit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

impl UpsertProfileRequest {
    fn try_into_command(self) -> Result<UpsertProfileCommand, ApiError> {
        let status = match &self.status {
            Some(status) if !status.trim().is_empty() => Some(status.clone()),
            _ => return Err(ApiError::BadRequest("Status is required".to_string())),
        };

        let skills = match &self.skills {
            Some(raw) if !raw.trim().is_empty() => Some(Profile::parse_skills(raw)),
            _ => return Err(ApiError::BadRequest("Skills is required".to_string())),
        };

        Ok(UpsertProfileCommand {
            company: self.company,
            website: self.website,
            location: self.location,
            status,
            bio: self.bio,
            github_username: self.github_username,
            skills,
            twitter: self.twitter,
            facebook: self.facebook,
            instagram: self.instagram,
            linkedin: self.linkedin,
            youtube: self.youtube,
        })
    }
}
