use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// Deliberately minimal: the subject is the user identifier and the only
/// other fields are the timestamps the signature covers. There is no role
/// or permission data; a verified token means "known signed identity" and
/// nothing more.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a user with an expiration relative to now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_user(user_id: impl ToString, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", 10);

        assert_eq!(claims.sub, "user123");
        // 10 hours in seconds
        assert_eq!(claims.exp - claims.iat, 10 * 60 * 60);
    }
}
