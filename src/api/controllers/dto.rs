pub mod address_dto;
pub mod admin_dto;
pub mod banner_dto;
pub mod cart_dto;
pub mod category_dto;
pub mod order_dto;
pub mod product_dto;
pub mod user_dto;
