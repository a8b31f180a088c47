use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::profile::models::Education;
use crate::domain::profile::models::Experience;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::SocialLinks;
use crate::domain::profile::ports::ProfileRepository;
use crate::domain::user::models::UserId;
use crate::profile::errors::ProfileError;

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn experiences_by_owner(
        &self,
        owners: Option<&UserId>,
    ) -> Result<HashMap<Uuid, Vec<Experience>>, ProfileError> {
        let query = match owners {
            Some(owner) => sqlx::query_as::<_, ExperienceRow>(
                "SELECT id, user_id, title, company, location, from_date, to_date, current,
                        description, created_at
                 FROM experiences WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(owner.0),
            None => sqlx::query_as::<_, ExperienceRow>(
                "SELECT id, user_id, title, company, location, from_date, to_date, current,
                        description, created_at
                 FROM experiences ORDER BY created_at DESC",
            ),
        };

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        let mut grouped: HashMap<Uuid, Vec<Experience>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.user_id)
                .or_default()
                .push(row.into_domain());
        }
        Ok(grouped)
    }

    async fn educations_by_owner(
        &self,
        owners: Option<&UserId>,
    ) -> Result<HashMap<Uuid, Vec<Education>>, ProfileError> {
        let query = match owners {
            Some(owner) => sqlx::query_as::<_, EducationRow>(
                "SELECT id, user_id, school, degree, field_of_study, from_date, to_date, current,
                        description, created_at
                 FROM educations WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(owner.0),
            None => sqlx::query_as::<_, EducationRow>(
                "SELECT id, user_id, school, degree, field_of_study, from_date, to_date, current,
                        description, created_at
                 FROM educations ORDER BY created_at DESC",
            ),
        };

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        let mut grouped: HashMap<Uuid, Vec<Education>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.user_id)
                .or_default()
                .push(row.into_domain());
        }
        Ok(grouped)
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: Option<String>,
    bio: Option<String>,
    github_username: Option<String>,
    skills: Vec<String>,
    twitter: Option<String>,
    facebook: Option<String>,
    instagram: Option<String>,
    linkedin: Option<String>,
    youtube: Option<String>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_domain(self, experience: Vec<Experience>, education: Vec<Education>) -> Profile {
        Profile {
            user_id: UserId(self.user_id),
            company: self.company,
            website: self.website,
            location: self.location,
            status: self.status,
            bio: self.bio,
            github_username: self.github_username,
            skills: self.skills,
            social: SocialLinks {
                twitter: self.twitter,
                facebook: self.facebook,
                instagram: self.instagram,
                linkedin: self.linkedin,
                youtube: self.youtube,
            },
            experience,
            education,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    company: String,
    location: Option<String>,
    from_date: DateTime<Utc>,
    to_date: Option<DateTime<Utc>>,
    current: bool,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl ExperienceRow {
    fn into_domain(self) -> Experience {
        Experience {
            id: self.id,
            title: self.title,
            company: self.company,
            location: self.location,
            from: self.from_date,
            to: self.to_date,
            current: self.current,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EducationRow {
    id: Uuid,
    user_id: Uuid,
    school: String,
    degree: String,
    field_of_study: String,
    from_date: DateTime<Utc>,
    to_date: Option<DateTime<Utc>>,
    current: bool,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl EducationRow {
    fn into_domain(self) -> Education {
        Education {
            id: self.id,
            school: self.school,
            degree: self.degree,
            field_of_study: self.field_of_study,
            from: self.from_date,
            to: self.to_date,
            current: self.current,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

const PROFILE_COLUMNS: &str = "user_id, company, website, location, status, bio, \
     github_username, skills, twitter, facebook, instagram, linkedin, youtube, updated_at";

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError> {
        // Single atomic write per owner key; the store serializes
        // concurrent upserts on the primary key.
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, company, website, location, status, bio,
                                  github_username, skills, twitter, facebook, instagram,
                                  linkedin, youtube, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (user_id) DO UPDATE SET
                company = EXCLUDED.company,
                website = EXCLUDED.website,
                location = EXCLUDED.location,
                status = EXCLUDED.status,
                bio = EXCLUDED.bio,
                github_username = EXCLUDED.github_username,
                skills = EXCLUDED.skills,
                twitter = EXCLUDED.twitter,
                facebook = EXCLUDED.facebook,
                instagram = EXCLUDED.instagram,
                linkedin = EXCLUDED.linkedin,
                youtube = EXCLUDED.youtube,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.user_id.0)
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.status)
        .bind(&profile.bio)
        .bind(&profile.github_username)
        .bind(&profile.skills)
        .bind(&profile.social.twitter)
        .bind(&profile.social.facebook)
        .bind(&profile.social.instagram)
        .bind(&profile.social.linkedin)
        .bind(&profile.social.youtube)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(profile)
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Option<Profile>, ProfileError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut experiences = self.experiences_by_owner(Some(owner)).await?;
        let mut educations = self.educations_by_owner(Some(owner)).await?;

        Ok(Some(row.into_domain(
            experiences.remove(&owner.0).unwrap_or_default(),
            educations.remove(&owner.0).unwrap_or_default(),
        )))
    }

    async fn list_all(&self) -> Result<Vec<Profile>, ProfileError> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY updated_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        let mut experiences = self.experiences_by_owner(None).await?;
        let mut educations = self.educations_by_owner(None).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let experience = experiences.remove(&row.user_id).unwrap_or_default();
                let education = educations.remove(&row.user_id).unwrap_or_default();
                row.into_domain(experience, education)
            })
            .collect())
    }

    async fn add_experience(
        &self,
        owner: &UserId,
        experience: &Experience,
    ) -> Result<(), ProfileError> {
        sqlx::query(
            r#"
            INSERT INTO experiences (id, user_id, title, company, location, from_date,
                                     to_date, current, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(experience.id)
        .bind(owner.0)
        .bind(&experience.title)
        .bind(&experience.company)
        .bind(&experience.location)
        .bind(experience.from)
        .bind(experience.to)
        .bind(experience.current)
        .bind(&experience.description)
        .bind(experience.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn add_education(
        &self,
        owner: &UserId,
        education: &Education,
    ) -> Result<(), ProfileError> {
        sqlx::query(
            r#"
            INSERT INTO educations (id, user_id, school, degree, field_of_study, from_date,
                                    to_date, current, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(education.id)
        .bind(owner.0)
        .bind(&education.school)
        .bind(&education.degree)
        .bind(&education.field_of_study)
        .bind(education.from)
        .bind(education.to)
        .bind(education.current)
        .bind(&education.description)
        .bind(education.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, owner: &UserId) -> Result<(), ProfileError> {
        // Idempotent; experience/education rows removed by ON DELETE CASCADE
        sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(owner.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
