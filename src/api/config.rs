use dotenvy::dotenv;
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub db_pool_max: usize,
    pub jwt_secret: String,
    pub jwt_expiration_minutes: u64,
}

impl Config {
    pub fn new() -> Self {
        CONFIG.clone()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok();

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db_pool_max = std::env::var("DB_POOL_MAX")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .expect("DB_POOL_MAX must be a valid usize");
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let jwt_expiration_minutes = std::env::var("JWT_EXPIRATION_MINUTES")
        .unwrap_or_else(|_| "1440".to_string())
        .parse()
        .expect("JWT_EXPIRATION_MINUTES must be a valid u64");

    tracing::info!("Config loaded");

    Config {
        bind_addr,
        database_url,
        db_pool_max,
        jwt_secret,
        jwt_expiration_minutes,
    }
});
