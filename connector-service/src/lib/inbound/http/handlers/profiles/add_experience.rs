use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::profile::models::AddExperienceCommand;
use crate::domain::profile::ports::ProfileServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::ProfileData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_experience(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<AddExperienceRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .profile_service
        .add_experience(&auth_user.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl AddExperienceRequest {
    fn try_into_command(self) -> Result<AddExperienceCommand, ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::BadRequest("Title is required".to_string()));
        }
        if self.company.trim().is_empty() {
            return Err(ApiError::BadRequest("Company is required".to_string()));
        }

        Ok(AddExperienceCommand {
            title: self.title,
            company: self.company,
            location: self.location,
            from: self.from,
            to: self.to,
            current: self.current,
            description: self.description,
        })
    }
}
