pub mod google_auth_service;
pub mod token_service;
pub mod user_details_service;
