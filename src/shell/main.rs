use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use shopping_cart::modules::cart::adapters::outbound::stock_service_http::HttpStockService;
use shopping_cart::modules::cart::cart_manager::CartManager;
use shopping_cart::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use shopping_cart::shared::infrastructure::notifier::tracing_notifier::TracingNotifier;
use shopping_cart::shell::config::AppConfig;
use shopping_cart::shell::http::router;
use shopping_cart::shell::persistence::open_cart_store;
use shopping_cart::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    tracing::info!(?config, "configuration loaded");

    let store = Arc::new(FileKeyValueStore::new(&config.storage_path));
    let stock_service = Arc::new(HttpStockService::new(config.stock_api_url.clone()));

    let cart_store = open_cart_store(store, &config.storage_key).await?;

    let manager = CartManager::new(Arc::new(cart_store), stock_service, Arc::new(TracingNotifier));
    let state = AppState {
        cart: Arc::new(manager),
    };

    let app: Router = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    tracing::info!("Cart endpoint: http://{}/cart", config.http_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
