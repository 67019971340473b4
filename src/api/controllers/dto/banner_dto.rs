use crate::data::models::banner::Banner;
use serde::Serialize;

#[derive(Serialize)]
pub struct BannerResponse {
    pub banner_id: i32,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub button_text: Option<String>,
    pub sort_order: i32,
}

impl From<Banner> for BannerResponse {
    fn from(banner: Banner) -> Self {
        Self {
            banner_id: banner.banner_id,
            title: banner.title,
            subtitle: banner.subtitle,
            image_url: banner.image_url,
            link_url: banner.link_url,
            button_text: banner.button_text,
            sort_order: banner.sort_order,
        }
    }
}
