use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::core::product::ProductId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("requested quantity unavailable")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { events: Vec<CartEvent> },
    Rejected { reason: DecideError },
}
