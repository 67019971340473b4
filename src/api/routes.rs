pub mod address_routes;
pub mod admin_routes;
pub mod auth_routes;
pub mod banner_routes;
pub mod cart_routes;
pub mod category_routes;
pub mod order_routes;
pub mod product_routes;
pub mod user_routes;
