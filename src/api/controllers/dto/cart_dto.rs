use crate::data::models::cart_item::CartItem;
use crate::data::models::product::Product;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

fn default_quantity() -> i32 {
    1
}

#[derive(Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[derive(Serialize)]
pub struct CartItemResponse {
    pub cart_item_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub product_image: Option<String>,
    pub product_price: BigDecimal,
    pub product_stock: i32,
    pub product_status: String,
    pub quantity: i32,
    pub subtotal: BigDecimal,
}

impl From<(CartItem, Product)> for CartItemResponse {
    fn from((item, product): (CartItem, Product)) -> Self {
        let subtotal = product.price.clone() * BigDecimal::from(item.quantity);
        Self {
            cart_item_id: item.cart_item_id,
            product_id: product.product_id,
            product_name: product.name,
            product_image: product.image,
            product_price: product.price,
            product_stock: product.stock,
            product_status: product.status,
            quantity: item.quantity,
            subtotal,
        }
    }
}

#[derive(Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub total: BigDecimal,
}

impl From<Vec<(CartItem, Product)>> for CartResponse {
    fn from(rows: Vec<(CartItem, Product)>) -> Self {
        let items: Vec<CartItemResponse> =
            rows.into_iter().map(CartItemResponse::from).collect();
        let total = items
            .iter()
            .map(|item| item.subtotal.clone())
            .sum::<BigDecimal>();
        Self { items, total }
    }
}
