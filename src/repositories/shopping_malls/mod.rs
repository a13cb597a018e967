pub mod shopping_mall_repo;
