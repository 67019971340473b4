use crate::data::models::schema::*;
use crate::data::models::user::User;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub order_number: String,
    pub status: String,
    pub payment_status: String,
    pub total_amount: BigDecimal,
    pub shipping_address: String,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder<'a> {
    pub user_id: i32,
    pub order_number: &'a str,
    pub status: &'a str,
    pub payment_status: &'a str,
    pub total_amount: BigDecimal,
    pub shipping_address: &'a str,
    pub payment_method: Option<&'a str>,
    pub notes: Option<&'a str>,
}
