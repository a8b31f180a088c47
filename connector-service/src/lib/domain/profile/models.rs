use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::UserId;

/// Profile aggregate entity.
///
/// At most one per user, keyed by the owner's id (a back-reference, not
/// an embedded copy of the user). Experience and education entries are
/// ordered newest-first.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: UserId,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create an empty profile for an owner.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            company: None,
            website: None,
            location: None,
            status: None,
            bio: None,
            github_username: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Parse a comma-separated skills string into a trimmed list.
    ///
    /// Empty segments are dropped ("rust,, go , " -> ["rust", "go"]).
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Optional social media links.
///
/// Absent links stay absent; they are omitted from responses rather than
/// serialized as null.
#[derive(Debug, Clone, Default)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

/// A work experience entry.
#[derive(Debug, Clone)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An education entry; same shape as experience, pure data.
#[derive(Debug, Clone)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Command to create or update a profile.
///
/// All fields optional; on update, absent fields keep their prior values.
#[derive(Debug, Default)]
pub struct UpsertProfileCommand {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Option<Vec<String>>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

/// Command to prepend a work experience entry.
#[derive(Debug)]
pub struct AddExperienceCommand {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

/// Command to prepend an education entry.
#[derive(Debug)]
pub struct AddEducationCommand {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

/// A profile joined with its owner's display data at read time.
///
/// The name and avatar come from the user record when listing, never from
/// a stored copy on the profile.
#[derive(Debug, Clone)]
pub struct ProfileWithOwner {
    pub profile: Profile,
    pub name: String,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_trims_and_drops_empty() {
        let skills = Profile::parse_skills(" rust, postgres ,, go ,");
        assert_eq!(skills, vec!["rust", "postgres", "go"]);
    }

    #[test]
    fn test_parse_skills_empty_input() {
        assert!(Profile::parse_skills("").is_empty());
        assert!(Profile::parse_skills(" , ,").is_empty());
    }
}
