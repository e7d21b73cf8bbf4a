use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ProductId = u64;

/// Catalog view of a product as returned by `GET /products/{id}`. Carries no amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A cart entry: the catalog details plus the selected amount.
///
/// Only `id` and `amount` are required. Display fields are optional, and anything beyond
/// `title`, `price` and `image` is kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub amount: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn from_details(details: ProductDetails, amount: u32) -> Self {
        let mut extra = details.extra;
        extra.remove("amount");
        Self {
            id: details.id,
            title: details.title,
            price: details.price,
            image: details.image,
            amount,
            extra,
        }
    }
}

#[cfg(test)]
mod cart_product_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_keep_unknown_display_fields() {
        let details: ProductDetails = serde_json::from_value(json!({
            "id": 1,
            "title": "Tênis de Caminhada Leve Confortável",
            "price": 179.9,
            "image": "https://example.com/shoe-1.jpg",
            "brand": "Rocket"
        }))
        .expect("details should decode");

        assert_eq!(details.extra.get("brand"), Some(&json!("Rocket")));

        let product = Product::from_details(details, 1);
        let encoded = serde_json::to_value(&product).expect("product should encode");
        assert_eq!(encoded["brand"], json!("Rocket"));
        assert_eq!(encoded["amount"], json!(1));
    }

    #[rstest]
    fn it_should_ignore_an_amount_sent_by_the_catalog() {
        let details: ProductDetails = serde_json::from_value(json!({
            "id": 2,
            "title": "Shoe",
            "price": 99.0,
            "amount": 40
        }))
        .expect("details should decode");

        let product = Product::from_details(details, 1);
        assert_eq!(product.amount, 1);
        assert!(!product.extra.contains_key("amount"));
        assert_eq!(product.image, None);
    }

    #[rstest]
    fn it_should_decode_a_catalog_item_without_a_price() {
        let details: ProductDetails = serde_json::from_value(json!({
            "id": 1,
            "title": "Shoe",
            "image": "x"
        }))
        .expect("details should decode");

        assert_eq!(details.price, None);
        let product = Product::from_details(details, 1);
        let encoded = serde_json::to_value(&product).expect("product should encode");
        assert_eq!(
            encoded,
            json!({ "id": 1, "title": "Shoe", "image": "x", "amount": 1 })
        );
    }

    #[rstest]
    fn it_should_round_trip_an_entry_with_only_id_and_amount() {
        let product: Product = serde_json::from_value(json!({ "id": 1, "amount": 1 }))
            .expect("minimal entry should decode");

        assert_eq!(product.title, None);
        assert!(product.extra.is_empty());
        let encoded = serde_json::to_value(&product).expect("product should encode");
        assert_eq!(encoded, json!({ "id": 1, "amount": 1 }));
    }

    #[rstest]
    fn it_should_reject_a_negative_amount() {
        let result = serde_json::from_value::<Product>(json!({
            "id": 3,
            "title": "Shoe",
            "price": 10.0,
            "amount": -1
        }));
        assert!(result.is_err());
    }
}
