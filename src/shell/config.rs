use crate::modules::cart::adapters::outbound::cart_store::DEFAULT_CART_KEY;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Runtime configuration of the cart service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP router binds to.
    pub http_addr: SocketAddr,
    /// Base URL of the stock and catalog API.
    pub stock_api_url: String,
    /// File that persists the cart between restarts.
    pub storage_path: PathBuf,
    /// Key the cart is stored under.
    pub storage_key: String,
}

impl AppConfig {
    /// Load configuration from environment variables, after loading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to a value that cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let http_addr = get_or("CART_HTTP_ADDR", "0.0.0.0:8080")
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_HTTP_ADDR".to_string(), e.to_string()))?;

        let stock_api_url = get_or("CART_STOCK_API_URL", "http://localhost:3333");
        if !(stock_api_url.starts_with("http://") || stock_api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar(
                "CART_STOCK_API_URL".to_string(),
                "expected an http or https URL".to_string(),
            ));
        }

        let storage_path = PathBuf::from(get_or("CART_STORAGE_PATH", "./cart-storage.json"));

        let storage_key = get_or("CART_STORAGE_KEY", DEFAULT_CART_KEY);
        if storage_key.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CART_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            http_addr,
            stock_api_url,
            storage_path,
            storage_key,
        })
    }
}
