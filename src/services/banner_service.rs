use crate::data::models::banner::Banner;
use crate::data::repos::implementors::banner_repo::BannerRepo;
use crate::services::errors::ProductServiceError;

pub struct BannerService;

impl BannerService {
    pub fn new() -> Self {
        BannerService
    }

    pub async fn get_active_banners(&self) -> Result<Vec<Banner>, ProductServiceError> {
        let repo = BannerRepo::new();
        repo.get_active().await.map_err(|e| {
            tracing::error!("Failed to list banners: {}", e);
            ProductServiceError::DatabaseError
        })
    }
}

impl Default for BannerService {
    fn default() -> Self {
        Self::new()
    }
}
