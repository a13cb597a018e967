pub mod members;
pub mod coupons;
pub mod shopping_malls;
pub mod orders;
pub mod tokens;
