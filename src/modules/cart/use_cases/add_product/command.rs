use crate::modules::cart::core::product::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddProduct {
    pub product_id: ProductId,
}
