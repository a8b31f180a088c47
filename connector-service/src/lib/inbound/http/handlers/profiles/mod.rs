pub mod add_education;
pub mod add_experience;
pub mod delete_account;
pub mod get_my_profile;
pub mod get_profile_by_user;
pub mod list_profiles;
pub mod upsert_profile;

pub use add_education::add_education;
pub use add_experience::add_experience;
pub use delete_account::delete_account;
pub use get_my_profile::get_my_profile;
pub use get_profile_by_user::get_profile_by_user;
pub use list_profiles::list_profiles;
pub use upsert_profile::upsert_profile;
