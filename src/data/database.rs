use crate::api::config::Config;
use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, deadpool};
use once_cell::sync::Lazy;

/// Handle onto the storefront's shared MySQL pool. Repositories construct one
/// per operation; every handle clones the same process-wide pool.
pub struct Database {
    pool: Pool<AsyncMysqlConnection>,
}

impl Database {
    pub async fn new() -> Self {
        Database {
            pool: STORE_POOL.clone(),
        }
    }

    pub async fn get_connection(
        &self,
    ) -> Result<Object<AsyncMysqlConnection>, deadpool::PoolError> {
        self.pool.get().await
    }
}

/// One pool per process, sized and pointed at the store database through
/// `Config` (`DATABASE_URL`, `DB_POOL_MAX`).
static STORE_POOL: Lazy<Pool<AsyncMysqlConnection>> = Lazy::new(|| {
    let config = Config::new();

    let manager =
        AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(&config.database_url);
    let pool = Pool::builder(manager)
        .max_size(config.db_pool_max)
        .build()
        .expect("Failed to create database connection pool");

    tracing::info!("Store DB pool ready ({} connections max)", config.db_pool_max);

    pool
});
