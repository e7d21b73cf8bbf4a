use crate::modules::cart::core::product::{ProductDetails, ProductId};
use crate::modules::cart::core::stock::Stock;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockServiceError {
    #[error("{resource} not found for product {product_id}")]
    NotFound {
        resource: &'static str,
        product_id: ProductId,
    },

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Remote inventory and catalog lookups the cart validates against.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, StockServiceError>;
    async fn get_product(&self, product_id: ProductId)
    -> Result<ProductDetails, StockServiceError>;
}
