pub mod post;
pub mod profile;
pub mod user;

pub use post::PostgresPostRepository;
pub use profile::PostgresProfileRepository;
pub use user::PostgresUserRepository;
