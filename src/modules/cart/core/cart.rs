use crate::modules::cart::core::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Ordered cart entries, in first-add order, at most one per product id.
///
/// Serializes as a bare JSON array, which is the persisted layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub(crate) fn products_mut(&mut self) -> &mut Vec<Product> {
        &mut self.products
    }
}

impl From<Vec<Product>> for Cart {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.products
    }
}
