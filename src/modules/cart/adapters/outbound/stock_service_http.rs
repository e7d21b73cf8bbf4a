// HTTP implementation of the StockService port.
//
// Contract
// - GET {base_url}/stock/{product_id}    -> { "amount": n }
// - GET {base_url}/products/{product_id} -> { "id": n, "title": ..., "price": ..., "image": ... }
//
// No timeout is configured on the client; a lookup waits for the remote side.

use crate::modules::cart::adapters::outbound::stock_service::{StockService, StockServiceError};
use crate::modules::cart::core::product::{ProductDetails, ProductId};
use crate::modules::cart::core::stock::Stock;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Deserialize)]
struct StockBody {
    amount: u32,
}

#[derive(Debug, Clone)]
pub struct HttpStockService {
    client: Client,
    base_url: String,
}

impl HttpStockService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        product_id: ProductId,
    ) -> Result<T, StockServiceError> {
        let url = format!("{}/{}/{}", self.base_url, resource, product_id);
        tracing::debug!(%url, "requesting");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| StockServiceError::Transport(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StockServiceError::NotFound {
                resource,
                product_id,
            });
        }
        if !status.is_success() {
            return Err(StockServiceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| StockServiceError::Decode(err.to_string()))
    }
}

#[async_trait]
impl StockService for HttpStockService {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, StockServiceError> {
        let body: StockBody = self.get_json("stock", product_id).await?;
        Ok(Stock::new(product_id, body.amount))
    }

    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<ProductDetails, StockServiceError> {
        self.get_json("products", product_id).await
    }
}
