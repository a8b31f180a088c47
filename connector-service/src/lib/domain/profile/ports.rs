use async_trait::async_trait;

use crate::domain::profile::models::AddEducationCommand;
use crate::domain::profile::models::AddExperienceCommand;
use crate::domain::profile::models::Education;
use crate::domain::profile::models::Experience;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileWithOwner;
use crate::domain::profile::models::UpsertProfileCommand;
use crate::domain::user::models::UserId;
use crate::profile::errors::ProfileError;

/// Port for profile domain service operations.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// Create or update the owner's profile.
    ///
    /// Partial update: provided fields replace the stored values,
    /// absent fields keep their prior values. Creates the profile if
    /// the owner has none.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn upsert(
        &self,
        owner: &UserId,
        command: UpsertProfileCommand,
    ) -> Result<Profile, ProfileError>;

    /// Retrieve a profile by its owner.
    ///
    /// # Errors
    /// * `NotFound` - No profile for this user
    /// * `DatabaseError` - Database operation failed
    async fn get_by_owner(&self, owner: &UserId) -> Result<Profile, ProfileError>;

    /// List every profile with the owner's name and avatar joined in
    /// at read time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<ProfileWithOwner>, ProfileError>;

    /// Prepend a work experience entry (newest-first).
    ///
    /// # Errors
    /// * `NotFound` - No profile for this user
    /// * `DatabaseError` - Database operation failed
    async fn add_experience(
        &self,
        owner: &UserId,
        command: AddExperienceCommand,
    ) -> Result<Profile, ProfileError>;

    /// Prepend an education entry (newest-first).
    ///
    /// # Errors
    /// * `NotFound` - No profile for this user
    /// * `DatabaseError` - Database operation failed
    async fn add_education(
        &self,
        owner: &UserId,
        command: AddEducationCommand,
    ) -> Result<Profile, ProfileError>;

    /// Delete the owner's profile and user record together (full
    /// account deletion). Idempotent: a no-op when neither exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_account(&self, owner: &UserId) -> Result<(), ProfileError>;
}

/// Persistence operations for the profile aggregate.
#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    /// Insert or replace the profile row for its owner.
    ///
    /// The store serializes concurrent writes to the same owner key;
    /// experience and education entries are not touched.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;

    /// Retrieve a profile (with experience and education) by owner.
    ///
    /// # Returns
    /// Optional profile (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(&self, owner: &UserId) -> Result<Option<Profile>, ProfileError>;

    /// Retrieve all profiles (with experience and education).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Profile>, ProfileError>;

    /// Persist a new experience entry for an owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn add_experience(
        &self,
        owner: &UserId,
        experience: &Experience,
    ) -> Result<(), ProfileError>;

    /// Persist a new education entry for an owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn add_education(
        &self,
        owner: &UserId,
        education: &Education,
    ) -> Result<(), ProfileError>;

    /// Remove the profile row for an owner.
    ///
    /// Idempotent: removing an absent profile is a no-op. Experience
    /// and education rows are removed by cascading constraints.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, owner: &UserId) -> Result<(), ProfileError>;
}
