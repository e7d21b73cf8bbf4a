use crate::modules::cart::core::product::ProductId;

/// Available inventory for a product, observed for a single validation and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub product_id: ProductId,
    pub amount: u32,
}

impl Stock {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }

    pub fn is_sold_out(&self) -> bool {
        self.amount == 0
    }

    pub fn covers(&self, requested: u32) -> bool {
        requested <= self.amount
    }
}
