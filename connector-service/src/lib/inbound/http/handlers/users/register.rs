use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::TokenData;
use crate::inbound::http::router::AppState;

const MIN_PASSWORD_LENGTH: usize = 6;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let command = body.try_into_command()?;

    let user = state
        .user_service
        .register(command)
        .await
        .map_err(ApiError::from)?;

    // Registration doubles as login: the response carries a fresh token
    let claims = auth::Claims::for_user(&user.id, state.jwt_expiration_hours);
    let token = state
        .authenticator
        .generate_token(&claims)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(StatusCode::CREATED, TokenData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::BadRequest("Name is required".to_string()));
        }

        let email = EmailAddress::new(self.email)
            .map_err(|_| ApiError::BadRequest("Please include a valid email".to_string()))?;

        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::BadRequest(
                "Please enter a password with 6 or more characters".to_string(),
            ));
        }

        Ok(RegisterUserCommand::new(self.name, email, self.password))
    }
}
