use crate::data::models::schema::*;
use crate::data::models::user::User;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = addresses)]
#[diesel(primary_key(address_id))]
#[diesel(belongs_to(User, foreign_key = user_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Address {
    pub address_id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    pub district: String,
    pub detail: String,
    pub is_default: bool,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = addresses)]
pub struct NewAddress<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub phone: &'a str,
    pub province: &'a str,
    pub city: &'a str,
    pub district: &'a str,
    pub detail: &'a str,
    pub is_default: bool,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = addresses)]
pub struct UpdateAddress<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub province: Option<&'a str>,
    pub city: Option<&'a str>,
    pub district: Option<&'a str>,
    pub detail: Option<&'a str>,
    pub is_default: Option<bool>,
}
