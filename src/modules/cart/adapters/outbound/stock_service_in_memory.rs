// In memory implementation of the StockService port.
//
// Purpose
// - Support handler tests and local development without a catalog API.
//
// Responsibilities
// - Answer stock and product lookups from seeded maps.
// - Simulate an unreachable service and slow responses.

use crate::modules::cart::adapters::outbound::stock_service::{StockService, StockServiceError};
use crate::modules::cart::core::product::{ProductDetails, ProductId};
use crate::modules::cart::core::stock::Stock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStockService {
    stock: RwLock<HashMap<ProductId, u32>>,
    catalog: RwLock<HashMap<ProductId, ProductDetails>>,
    is_offline: bool,
    delay_ms: AtomicU64,
    product_lookups: AtomicUsize,
}

impl InMemoryStockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(mut self, product_id: ProductId, amount: u32) -> Self {
        self.stock.get_mut().insert(product_id, amount);
        self
    }

    pub fn with_product(mut self, details: ProductDetails) -> Self {
        self.catalog.get_mut().insert(details.id, details);
        self
    }

    pub async fn set_stock(&self, product_id: ProductId, amount: u32) {
        self.stock.write().await.insert(product_id, amount);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays every lookup, so concurrent operations interleave at their await points.
    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub fn product_lookups(&self) -> usize {
        self.product_lookups.load(Ordering::SeqCst)
    }

    async fn simulate_latency(&self) -> Result<(), StockServiceError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline {
            return Err(StockServiceError::Backend("Stock service offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StockService for InMemoryStockService {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, StockServiceError> {
        self.simulate_latency().await?;
        self.stock
            .read()
            .await
            .get(&product_id)
            .map(|&amount| Stock::new(product_id, amount))
            .ok_or(StockServiceError::NotFound {
                resource: "stock",
                product_id,
            })
    }

    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<ProductDetails, StockServiceError> {
        self.simulate_latency().await?;
        self.product_lookups.fetch_add(1, Ordering::SeqCst);
        self.catalog
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or(StockServiceError::NotFound {
                resource: "products",
                product_id,
            })
    }
}
