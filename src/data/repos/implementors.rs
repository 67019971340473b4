pub mod address_repo;
pub mod banner_repo;
pub mod cart_repo;
pub mod category_repo;
pub mod order_repo;
pub mod product_repo;
pub mod user_repo;
