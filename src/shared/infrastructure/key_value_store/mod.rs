use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store contents: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// String-keyed durable storage, the local-storage analog the cart is persisted to.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueStoreError>;
}

pub mod file;
pub mod in_memory;
