pub mod address_controller;
pub mod admin_controller;
pub mod banner_controller;
pub mod cart_controller;
pub mod category_controller;
pub mod dto;
pub mod order_controller;
pub mod product_controller;
pub mod user_controller;
