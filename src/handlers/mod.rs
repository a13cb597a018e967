pub mod auth;
pub mod coupons;
pub mod members;
pub mod orders;
pub mod shopping_malls;
