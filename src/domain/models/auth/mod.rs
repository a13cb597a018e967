pub mod authenticated_user;
pub mod authentication_request;
pub mod user_security;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::RequiredRole;
pub use user_security::UserSecurity;
