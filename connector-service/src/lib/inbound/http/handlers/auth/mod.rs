pub mod get_current_user;
pub mod login;

pub use get_current_user::get_current_user;
pub use login::login;
