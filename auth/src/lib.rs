//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the connector service:
//! - Password hashing (Argon2id)
//! - JWT bearer token issuance and validation
//! - Authentication coordination (verify password, mint token)
//!
//! The service adapts these primitives to its own domain types; this crate
//! knows nothing about users beyond an opaque identifier string.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, PasswordHasher};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = PasswordHasher::new().hash("password123").unwrap();
//!
//! // Login: verify and generate a token that expires in 10 hours
//! let claims = Claims::for_user("user123", 10);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token on a later request
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
