pub mod page;
pub mod auth;
pub mod coupons;
pub mod members;
pub mod shopping_malls;
pub mod orders;

// 공통 re-exports
pub use page::{Page, PageRequest};
