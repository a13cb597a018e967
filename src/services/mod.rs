pub mod auth;
pub mod coupons;
pub mod members;
pub mod shopping_malls;
pub mod orders;
