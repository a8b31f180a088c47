use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::profile::models::AddEducationCommand;
use crate::domain::profile::ports::ProfileServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::ProfileData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_education(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<AddEducationRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .profile_service
        .add_education(&auth_user.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddEducationRequest {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl AddEducationRequest {
    fn try_into_command(self) -> Result<AddEducationCommand, ApiError> {
        if self.school.trim().is_empty() {
            return Err(ApiError::BadRequest("School is required".to_string()));
        }
        if self.degree.trim().is_empty() {
            return Err(ApiError::BadRequest("Degree is required".to_string()));
        }
        if self.field_of_study.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Field of study is required".to_string(),
            ));
        }

        Ok(AddEducationCommand {
            school: self.school,
            degree: self.degree,
            field_of_study: self.field_of_study,
            from: self.from,
            to: self.to,
            current: self.current,
            description: self.description,
        })
    }
}
