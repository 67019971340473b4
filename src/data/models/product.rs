use crate::data::models::category::Category;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(primary_key(product_id))]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: BigDecimal,
    pub original_price: Option<BigDecimal>,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub status: String,
    pub featured: bool,
    pub views: i32,
    pub sales: i32,
    pub rating: Option<BigDecimal>,
    pub rating_count: i32,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub price: BigDecimal,
    pub original_price: Option<BigDecimal>,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub brand: Option<&'a str>,
    pub sku: Option<&'a str>,
    pub status: &'a str,
    pub featured: bool,
}

#[derive(AsChangeset, PartialEq, Debug, Default)]
#[diesel(table_name = products)]
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub price: Option<BigDecimal>,
    pub original_price: Option<BigDecimal>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
    pub brand: Option<&'a str>,
    pub sku: Option<&'a str>,
    pub status: Option<&'a str>,
    pub featured: Option<bool>,
}
