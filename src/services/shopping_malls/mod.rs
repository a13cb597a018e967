pub mod shopping_mall_service;
