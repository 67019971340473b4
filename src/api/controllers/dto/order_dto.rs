use crate::data::models::order::Order;
use crate::data::models::order_item::OrderItem;
use crate::data::repos::implementors::order_repo::CreatedOrder;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct OrderLineRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub shipping_address: String,
    pub payment_method: Option<String>,
    pub items: Vec<OrderLineRequest>,
}

#[derive(Serialize)]
pub struct CreatedOrderResponse {
    pub order_id: i32,
    pub order_number: String,
    pub total_amount: BigDecimal,
}

impl From<CreatedOrder> for CreatedOrderResponse {
    fn from(created: CreatedOrder) -> Self {
        Self {
            order_id: created.order_id,
            order_number: created.order_number,
            total_amount: created.total_amount,
        }
    }
}

#[derive(Serialize)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub product_name: String,
    pub product_price: BigDecimal,
    pub quantity: i32,
    pub subtotal: BigDecimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            product_price: item.product_price,
            quantity: item.quantity,
            subtotal: item.subtotal,
        }
    }
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub order_id: i32,
    pub order_number: String,
    pub status: String,
    pub payment_status: String,
    pub total_amount: BigDecimal,
    pub shipping_address: String,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<(Order, Vec<OrderItem>)> for OrderResponse {
    fn from((order, items): (Order, Vec<OrderItem>)) -> Self {
        Self {
            order_id: order.order_id,
            order_number: order.order_number,
            status: order.status,
            payment_status: order.payment_status,
            total_amount: order.total_amount,
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
            notes: order.notes,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            created_at: order.created_at.map(|d| d.to_string()),
            updated_at: order.updated_at.map(|d| d.to_string()),
        }
    }
}
