use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sha2::Digest;
use sha2::Sha256;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

/// Gravatar-style avatar URL for an email address.
///
/// SHA-256 of the trimmed, lowercased address; sized 200px, PG-rated,
/// with the "mystery man" fallback. Captured once at registration.
fn gravatar_url(email: &EmailAddress) -> String {
    let digest = Sha256::digest(email.as_str().trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", digest)
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Hash password using auth library
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let avatar = gravatar_url(&command.email);

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            avatar,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn test_user(id: UserId) -> User {
        User {
            id,
            name: "Alice".to_string(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            avatar: "https://www.gravatar.com/avatar/abc?s=200&r=pg&d=mm".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.name == "Alice"
                    && user.email.as_str() == "alice@example.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.avatar.starts_with("https://www.gravatar.com/avatar/")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            name: "Alice".to_string(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let result = service.register(command).await;
        assert!(result.is_ok());

        let user = result.unwrap();
        assert_eq!(user.name, "Alice");
        // Password is hashed with real Argon2, never stored plaintext
        assert!(user.password_hash.starts_with("$argon2"));
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            name: "Alice Again".to_string(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password: "another_password".to_string(),
        };

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        let expected_user = test_user(user_id);

        let returned_user = expected_user.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(returned_user.clone())));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&user_id).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, user_id);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_email_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user_by_email("nobody@example.com").await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[test]
    fn test_gravatar_url_is_normalized() {
        let upper = EmailAddress::new("Alice@Example.com".to_string()).unwrap();
        let lower = EmailAddress::new("alice@example.com".to_string()).unwrap();

        assert_eq!(gravatar_url(&upper), gravatar_url(&lower));
        assert!(gravatar_url(&lower).ends_with("?s=200&r=pg&d=mm"));
    }
}
