use crate::modules::cart::core::product::ProductId;

/// Sets the amount of one cart entry. An amount of zero is not rejected here; removals go through
/// `RemoveProduct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: u32,
}
