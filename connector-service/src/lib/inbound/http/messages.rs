/// Serializable response shapes for the HTTP layer (infrastructure).
///
/// These types exist to separate domain models from serialization concerns.
/// Handlers convert domain entities into them before responding.
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::post::models::Comment;
use crate::domain::post::models::Like;
use crate::domain::post::models::Post;
use crate::domain::profile::models::Education;
use crate::domain::profile::models::Experience;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::ProfileWithOwner;
use crate::domain::profile::models::SocialLinks;
use crate::domain::user::models::User;

/// User as exposed over HTTP. The password hash never leaves the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

/// Token envelope returned by registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl From<&SocialLinks> for SocialData {
    fn from(social: &SocialLinks) -> Self {
        Self {
            twitter: social.twitter.clone(),
            facebook: social.facebook.clone(),
            instagram: social.instagram.clone(),
            linkedin: social.linkedin.clone(),
            youtube: social.youtube.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceData {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Experience> for ExperienceData {
    fn from(experience: &Experience) -> Self {
        Self {
            id: experience.id.to_string(),
            title: experience.title.clone(),
            company: experience.company.clone(),
            location: experience.location.clone(),
            from: experience.from,
            to: experience.to,
            current: experience.current,
            description: experience.description.clone(),
            created_at: experience.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationData {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Education> for EducationData {
    fn from(education: &Education) -> Self {
        Self {
            id: education.id.to_string(),
            school: education.school.clone(),
            degree: education.degree.clone(),
            field_of_study: education.field_of_study.clone(),
            from: education.from,
            to: education.to,
            current: education.current,
            description: education.description.clone(),
            created_at: education.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialData,
    pub experience: Vec<ExperienceData>,
    pub education: Vec<EducationData>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileData {
    fn from(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id.to_string(),
            company: profile.company.clone(),
            website: profile.website.clone(),
            location: profile.location.clone(),
            status: profile.status.clone(),
            bio: profile.bio.clone(),
            github_username: profile.github_username.clone(),
            skills: profile.skills.clone(),
            social: (&profile.social).into(),
            experience: profile.experience.iter().map(Into::into).collect(),
            education: profile.education.iter().map(Into::into).collect(),
            updated_at: profile.updated_at,
        }
    }
}

/// Owner display data joined into profile listings at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOwnerData {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileWithOwnerData {
    pub user: ProfileOwnerData,
    #[serde(flatten)]
    pub profile: ProfileData,
}

impl From<&ProfileWithOwner> for ProfileWithOwnerData {
    fn from(entry: &ProfileWithOwner) -> Self {
        Self {
            user: ProfileOwnerData {
                id: entry.profile.user_id.to_string(),
                name: entry.name.clone(),
                avatar: entry.avatar.clone(),
            },
            profile: (&entry.profile).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeData {
    pub user: String,
}

impl From<&Like> for LikeData {
    fn from(like: &Like) -> Self {
        Self {
            user: like.user_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: String,
    pub user: String,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user: comment.user_id.to_string(),
            name: comment.name.clone(),
            avatar: comment.avatar.clone(),
            text: comment.text.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: String,
    pub user: String,
    pub name: String,
    pub avatar: String,
    pub text: String,
    pub likes: Vec<LikeData>,
    pub comments: Vec<CommentData>,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            user: post.user_id.to_string(),
            name: post.name.clone(),
            avatar: post.avatar.clone(),
            text: post.text.as_str().to_string(),
            likes: post.likes.iter().map(Into::into).collect(),
            comments: post.comments.iter().map(Into::into).collect(),
            created_at: post.created_at,
        }
    }
}
