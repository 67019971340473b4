pub mod address;
pub mod banner;
pub mod cart_item;
pub mod category;
pub mod order;
pub mod order_item;
pub mod product;
pub mod schema;
pub mod user;
