pub mod member;
pub mod coupon;
pub mod shopping_mall;
pub mod order;

pub use member::Member;
pub use coupon::Coupon;
pub use shopping_mall::ShoppingMall;
pub use order::{Order, OrderStatus, ProductHistory};
