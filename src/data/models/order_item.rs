use crate::data::models::order::Order;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Immutable snapshot of one product line at the moment the order was placed.
/// Product name and price are copied here so later catalog edits never alter
/// historical orders.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
#[diesel(primary_key(order_item_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub product_price: BigDecimal,
    pub quantity: i32,
    pub subtotal: BigDecimal,
    pub created_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub product_price: BigDecimal,
    pub quantity: i32,
    pub subtotal: BigDecimal,
}
