use crate::data::database::Database;
use crate::data::models::banner::{Banner, NewBanner};
use crate::data::models::schema;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::{AsyncMysqlConnection, RunQueryDsl};

/// Homepage carousel entries. Read path only lists active banners; inserts
/// exist for seeding and the test suite.
pub struct BannerRepo {}

impl BannerRepo {
    pub fn new() -> Self {
        BannerRepo {}
    }

    async fn connection(&self) -> Result<Object<AsyncMysqlConnection>, result::Error> {
        let db = Database::new().await;
        db.get_connection().await.map_err(|e| {
            result::Error::DatabaseError(
                result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })
    }

    pub async fn get_active(&self) -> Result<Vec<Banner>, result::Error> {
        let mut conn = self.connection().await?;

        schema::banners::table
            .filter(schema::banners::is_active.eq(true))
            .order(schema::banners::sort_order.asc())
            .load::<Banner>(&mut conn)
            .await
    }

    pub async fn add(&self, item: NewBanner<'_>) -> Result<(), result::Error> {
        let mut conn = self.connection().await?;

        diesel::insert_into(schema::banners::table)
            .values(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }
}

impl Default for BannerRepo {
    fn default() -> Self {
        Self::new()
    }
}
