use crate::modules::cart::adapters::outbound::cart_store::CartStoreError;
use crate::modules::cart::adapters::outbound::stock_service::StockServiceError;
use crate::modules::cart::core::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    StockService(#[from] StockServiceError),

    #[error(transparent)]
    CartStore(#[from] CartStoreError),
}
