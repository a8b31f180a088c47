use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::profile::models::AddEducationCommand;
use crate::domain::profile::models::AddExperienceCommand;
use crate::domain::profile::models::Education;
use crate::domain::profile::models::Experience;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileWithOwner;
use crate::domain::profile::models::UpsertProfileCommand;
use crate::domain::user::models::UserId;
use crate::profile::errors::ProfileError;
use crate::profile::ports::ProfileRepository;
use crate::profile::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for profile operations.
///
/// Holds the user repository as well: listing joins owner display data at
/// read time, and account deletion removes the credential record together
/// with the profile.
pub struct ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    repository: Arc<PR>,
    user_repository: Arc<UR>,
}

impl<PR, UR> ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    /// Create a new profile service with injected dependencies.
    pub fn new(repository: Arc<PR>, user_repository: Arc<UR>) -> Self {
        Self {
            repository,
            user_repository,
        }
    }
}

#[async_trait]
impl<PR, UR> ProfileServicePort for ProfileService<PR, UR>
where
    PR: ProfileRepository,
    UR: UserRepository,
{
    async fn upsert(
        &self,
        owner: &UserId,
        command: UpsertProfileCommand,
    ) -> Result<Profile, ProfileError> {
        // Fetch-merge-save: unspecified fields keep their prior values.
        let mut profile = self
            .repository
            .find_by_owner(owner)
            .await?
            .unwrap_or_else(|| Profile::empty(*owner));

        if let Some(company) = command.company {
            profile.company = Some(company);
        }
        if let Some(website) = command.website {
            profile.website = Some(website);
        }
        if let Some(location) = command.location {
            profile.location = Some(location);
        }
        if let Some(status) = command.status {
            profile.status = Some(status);
        }
        if let Some(bio) = command.bio {
            profile.bio = Some(bio);
        }
        if let Some(github_username) = command.github_username {
            profile.github_username = Some(github_username);
        }
        if let Some(skills) = command.skills {
            profile.skills = skills;
        }
        if let Some(twitter) = command.twitter {
            profile.social.twitter = Some(twitter);
        }
        if let Some(facebook) = command.facebook {
            profile.social.facebook = Some(facebook);
        }
        if let Some(instagram) = command.instagram {
            profile.social.instagram = Some(instagram);
        }
        if let Some(linkedin) = command.linkedin {
            profile.social.linkedin = Some(linkedin);
        }
        if let Some(youtube) = command.youtube {
            profile.social.youtube = Some(youtube);
        }

        profile.updated_at = Utc::now();

        self.repository.upsert(profile).await
    }

    async fn get_by_owner(&self, owner: &UserId) -> Result<Profile, ProfileError> {
        self.repository
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<ProfileWithOwner>, ProfileError> {
        let profiles = self.repository.list_all().await?;

        let owner_ids: Vec<UserId> = profiles.iter().map(|p| p.user_id).collect();
        let owners = self.user_repository.find_by_ids(&owner_ids).await?;

        // Read-time join; profiles whose owner record vanished are skipped.
        Ok(profiles
            .into_iter()
            .filter_map(|profile| {
                owners
                    .iter()
                    .find(|user| user.id == profile.user_id)
                    .map(|user| ProfileWithOwner {
                        profile,
                        name: user.name.clone(),
                        avatar: user.avatar.clone(),
                    })
            })
            .collect())
    }

    async fn add_experience(
        &self,
        owner: &UserId,
        command: AddExperienceCommand,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self
            .repository
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)?;

        let experience = Experience {
            id: Uuid::new_v4(),
            title: command.title,
            company: command.company,
            location: command.location,
            from: command.from,
            to: command.to,
            current: command.current,
            description: command.description,
            created_at: Utc::now(),
        };

        self.repository.add_experience(owner, &experience).await?;

        // Newest-first
        profile.experience.insert(0, experience);
        Ok(profile)
    }

    async fn add_education(
        &self,
        owner: &UserId,
        command: AddEducationCommand,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self
            .repository
            .find_by_owner(owner)
            .await?
            .ok_or(ProfileError::NotFound)?;

        let education = Education {
            id: Uuid::new_v4(),
            school: command.school,
            degree: command.degree,
            field_of_study: command.field_of_study,
            from: command.from,
            to: command.to,
            current: command.current,
            description: command.description,
            created_at: Utc::now(),
        };

        self.repository.add_education(owner, &education).await?;

        profile.education.insert(0, education);
        Ok(profile)
    }

    async fn delete_account(&self, owner: &UserId) -> Result<(), ProfileError> {
        self.repository.delete(owner).await?;
        self.user_repository.delete(owner).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::User;
    use crate::user::errors::UserError;

    mock! {
        pub TestProfileRepository {}

        #[async_trait]
        impl ProfileRepository for TestProfileRepository {
            async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;
            async fn find_by_owner(&self, owner: &UserId) -> Result<Option<Profile>, ProfileError>;
            async fn list_all(&self) -> Result<Vec<Profile>, ProfileError>;
            async fn add_experience(&self, owner: &UserId, experience: &Experience) -> Result<(), ProfileError>;
            async fn add_education(&self, owner: &UserId, education: &Education) -> Result<(), ProfileError>;
            async fn delete(&self, owner: &UserId) -> Result<(), ProfileError>;
        }
    }

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

    fn test_user(id: UserId, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: EmailAddress::new(format!("{}@example.com", name.to_lowercase())).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            avatar: format!("https://www.gravatar.com/avatar/{}", name),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_when_absent() {
        let mut repository = MockTestProfileRepository::new();
        let user_repository = MockTestUserRepository::new();

        let owner = UserId::new();

        repository
            .expect_find_by_owner()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_upsert()
            .withf(move |p| {
                p.user_id == owner
                    && p.company.as_deref() == Some("Acme")
                    && p.skills == vec!["rust", "postgres"]
            })
            .times(1)
            .returning(|p| Ok(p));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let command = UpsertProfileCommand {
            company: Some("Acme".to_string()),
            skills: Some(vec!["rust".to_string(), "postgres".to_string()]),
            ..Default::default()
        };

        let result = service.upsert(&owner, command).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_upsert_merges_disjoint_fields() {
        let mut repository = MockTestProfileRepository::new();
        let user_repository = MockTestUserRepository::new();

        let owner = UserId::new();
        let mut existing = Profile::empty(owner);
        existing.company = Some("Acme".to_string());
        existing.skills = vec!["rust".to_string()];

        repository
            .expect_find_by_owner()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        // Two upserts with disjoint field sets yield the union
        repository
            .expect_upsert()
            .withf(|p| {
                p.company.as_deref() == Some("Acme")
                    && p.bio.as_deref() == Some("Systems programmer")
                    && p.skills == vec!["rust"]
            })
            .times(1)
            .returning(|p| Ok(p));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let command = UpsertProfileCommand {
            bio: Some("Systems programmer".to_string()),
            ..Default::default()
        };

        let result = service.upsert(&owner, command).await.unwrap();
        assert_eq!(result.company.as_deref(), Some("Acme"));
        assert_eq!(result.bio.as_deref(), Some("Systems programmer"));
    }

    #[tokio::test]
    async fn test_get_by_owner_not_found() {
        let mut repository = MockTestProfileRepository::new();
        let user_repository = MockTestUserRepository::new();

        repository
            .expect_find_by_owner()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service.get_by_owner(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), ProfileError::NotFound));
    }

    #[tokio::test]
    async fn test_list_all_joins_owner_data() {
        let mut repository = MockTestProfileRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        let alice_id = UserId::new();
        let orphan_id = UserId::new();

        repository.expect_list_all().times(1).returning(move || {
            Ok(vec![Profile::empty(alice_id), Profile::empty(orphan_id)])
        });
        // Only Alice's user record still exists
        user_repository
            .expect_find_by_ids()
            .times(1)
            .returning(move |_| Ok(vec![test_user(alice_id, "Alice")]));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let listed = service.list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].profile.user_id, alice_id);
        assert_eq!(listed[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_add_experience_prepends() {
        let mut repository = MockTestProfileRepository::new();
        let user_repository = MockTestUserRepository::new();

        let owner = UserId::new();
        let mut existing = Profile::empty(owner);
        existing.experience.push(Experience {
            id: Uuid::new_v4(),
            title: "Junior Developer".to_string(),
            company: "Oldco".to_string(),
            location: None,
            from: Utc::now() - Duration::days(900),
            to: Some(Utc::now() - Duration::days(400)),
            current: false,
            description: None,
            created_at: Utc::now() - Duration::days(400),
        });

        repository
            .expect_find_by_owner()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_add_experience()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let command = AddExperienceCommand {
            title: "Senior Developer".to_string(),
            company: "Acme".to_string(),
            location: Some("Remote".to_string()),
            from: Utc::now() - Duration::days(100),
            to: None,
            current: true,
            description: None,
        };

        let profile = service.add_experience(&owner, command).await.unwrap();
        assert_eq!(profile.experience.len(), 2);
        // Newest entry first
        assert_eq!(profile.experience[0].title, "Senior Developer");
        assert_eq!(profile.experience[1].title, "Junior Developer");
    }

    #[tokio::test]
    async fn test_add_experience_without_profile() {
        let mut repository = MockTestProfileRepository::new();
        let user_repository = MockTestUserRepository::new();

        repository
            .expect_find_by_owner()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let command = AddExperienceCommand {
            title: "Senior Developer".to_string(),
            company: "Acme".to_string(),
            location: None,
            from: Utc::now(),
            to: None,
            current: true,
            description: None,
        };

        let result = service.add_experience(&UserId::new(), command).await;
        assert!(matches!(result.unwrap_err(), ProfileError::NotFound));
    }

    #[tokio::test]
    async fn test_add_education_without_profile() {
        let mut repository = MockTestProfileRepository::new();
        let user_repository = MockTestUserRepository::new();

        repository
            .expect_find_by_owner()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let command = AddEducationCommand {
            school: "State University".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Computer Science".to_string(),
            from: Utc::now(),
            to: None,
            current: true,
            description: None,
        };

        let result = service.add_education(&UserId::new(), command).await;
        assert!(matches!(result.unwrap_err(), ProfileError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_account_removes_profile_and_user() {
        let mut repository = MockTestProfileRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        let owner = UserId::new();

        repository
            .expect_delete()
            .withf(move |id| *id == owner)
            .times(1)
            .returning(|_| Ok(()));
        user_repository
            .expect_delete()
            .withf(move |id| *id == owner)
            .times(1)
            .returning(|_| Ok(()));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service.delete_account(&owner).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_account_is_idempotent() {
        let mut repository = MockTestProfileRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        // Neither row exists; deletes are silent no-ops
        repository.expect_delete().times(1).returning(|_| Ok(()));
        user_repository
            .expect_delete()
            .times(1)
            .returning(|_| Ok(()));

        let service = ProfileService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service.delete_account(&UserId::new()).await;
        assert!(result.is_ok());
    }
}
