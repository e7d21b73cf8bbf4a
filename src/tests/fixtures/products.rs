// Shared test fixtures for cart entries and catalog details.
// Compiled only for tests through `crate::tests::fixtures`.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::{Product, ProductDetails, ProductId};

const PRODUCT_DETAILS_JSON: &str = include_str!("json/product_details.json");

pub fn make_product_details(id: ProductId) -> ProductDetails {
    let mut details: ProductDetails = serde_json::from_str(PRODUCT_DETAILS_JSON).unwrap();
    details.id = id;
    details.title = details.title.map(|title| format!("{title} #{id}"));
    details
}

pub struct ProductBuilder {
    inner: Product,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            inner: Product::from_details(make_product_details(1), 1),
        }
    }

    pub fn id(mut self, v: ProductId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = Some(v);
        self
    }

    pub fn amount(mut self, v: u32) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn build(self) -> Product {
        self.inner
    }
}

/// Builds a cart from `(id, amount)` pairs, in order.
pub fn cart_of(entries: &[(ProductId, u32)]) -> Cart {
    Cart::from(
        entries
            .iter()
            .map(|&(id, amount)| {
                Product::from_details(make_product_details(id), amount)
            })
            .collect::<Vec<_>>(),
    )
}

/// Projects a cart onto `(id, amount)` pairs, in order.
pub fn amounts(cart: &Cart) -> Vec<(ProductId, u32)> {
    cart.iter().map(|product| (product.id, product.amount)).collect()
}

#[cfg(test)]
mod cart_product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ProductBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.amount, 1);
        assert_eq!(built.price, Some(179.9));
        assert!(
            built
                .title
                .is_some_and(|title| title.starts_with("Tênis de Caminhada"))
        );
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = ProductBuilder::new()
            .id(42)
            .title("Chinelo")
            .price(19.9)
            .amount(4)
            .build();
        assert_eq!(custom.id, 42);
        assert_eq!(custom.title.as_deref(), Some("Chinelo"));
        assert_eq!(custom.price, Some(19.9));
        assert_eq!(custom.amount, 4);
    }

    #[rstest]
    fn cart_of_keeps_insertion_order() {
        let cart = cart_of(&[(3, 1), (1, 2)]);
        assert_eq!(amounts(&cart), vec![(3, 1), (1, 2)]);
    }
}
