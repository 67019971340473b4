use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = banners)]
#[diesel(primary_key(banner_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Banner {
    pub banner_id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub button_text: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = banners)]
pub struct NewBanner<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub image_url: &'a str,
    pub link_url: Option<&'a str>,
    pub button_text: Option<&'a str>,
    pub sort_order: i32,
    pub is_active: bool,
}
