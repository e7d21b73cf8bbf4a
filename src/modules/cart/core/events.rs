use crate::modules::cart::core::product::{Product, ProductId};

#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ProductAdded { product: Product },
    /// Raised when a product already in the cart is added again. Applies to every entry.
    AllAmountsIncremented,
    ProductRemoved { product_id: ProductId },
    ProductAmountUpdated { product_id: ProductId, amount: u32 },
}
