use crate::api::config::Config;
use crate::api::routes;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub async fn start() {
    let config = Config::new();
    let cors_layer = CorsLayer::new().allow_origin(Any);

    let router = Router::new()
        .route("/api", get(|| async { "Storefront API is running!" }))
        .nest("/api/auth", routes::auth_routes::routes())
        .nest("/api/users", routes::user_routes::routes())
        .nest("/api/products", routes::product_routes::routes())
        .nest("/api/categories", routes::category_routes::routes())
        .nest("/api/banners", routes::banner_routes::routes())
        .nest("/api/cart", routes::cart_routes::routes())
        .nest("/api/orders", routes::order_routes::routes())
        .nest("/api/addresses", routes::address_routes::routes())
        .nest("/api/admin", routes::admin_routes::routes())
        .layer(cors_layer)
        .with_state::<()>(());

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start the server");
}
