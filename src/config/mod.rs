pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
