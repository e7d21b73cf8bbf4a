// Pure decision for adding a product.
//
// Rules, in order
// - Sold out, or already in the cart at or above the observed stock: reject.
// - Already in the cart: increment the amount of every entry, not only the matching one.
// - Not in the cart: the handler fetches catalog details and appends them with amount 1.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::core::product::{Product, ProductDetails};
use crate::modules::cart::core::stock::Stock;
use crate::modules::cart::use_cases::add_product::command::AddProduct;

#[derive(Debug, PartialEq)]
pub enum AddProductDecision {
    Rejected { reason: DecideError },
    IncrementAll { events: Vec<CartEvent> },
    FetchDetails,
}

pub fn decide_add_product(cart: &Cart, command: &AddProduct, stock: &Stock) -> AddProductDecision {
    let existing = cart.find(command.product_id);
    let already_at_stock = existing.is_some_and(|product| product.amount >= stock.amount);

    if stock.is_sold_out() || already_at_stock {
        return AddProductDecision::Rejected {
            reason: DecideError::InsufficientStock {
                product_id: command.product_id,
                requested: existing.map_or(1, |product| product.amount.saturating_add(1)),
                available: stock.amount,
            },
        };
    }

    match existing {
        Some(_) => AddProductDecision::IncrementAll {
            events: vec![CartEvent::AllAmountsIncremented],
        },
        None => AddProductDecision::FetchDetails,
    }
}

pub fn append_product(details: ProductDetails) -> Vec<CartEvent> {
    vec![CartEvent::ProductAdded {
        product: Product::from_details(details, 1),
    }]
}

#[cfg(test)]
mod cart_add_product_decide_tests {
    use super::*;
    use crate::tests::fixtures::products::{cart_of, make_product_details};
    use rstest::rstest;

    const ADD_ONE: AddProduct = AddProduct { product_id: 1 };

    #[rstest]
    fn it_should_ask_for_details_when_the_product_is_new() {
        let decision = decide_add_product(&Cart::new(), &ADD_ONE, &Stock::new(1, 5));
        assert_eq!(decision, AddProductDecision::FetchDetails);
    }

    #[rstest]
    fn it_should_increment_all_when_the_product_is_present() {
        let cart = cart_of(&[(1, 2), (2, 1)]);
        let decision = decide_add_product(&cart, &ADD_ONE, &Stock::new(1, 5));
        assert_eq!(
            decision,
            AddProductDecision::IncrementAll {
                events: vec![CartEvent::AllAmountsIncremented]
            }
        );
    }

    #[rstest]
    fn it_should_reject_a_sold_out_product() {
        let decision = decide_add_product(&Cart::new(), &ADD_ONE, &Stock::new(1, 0));
        assert_eq!(
            decision,
            AddProductDecision::Rejected {
                reason: DecideError::InsufficientStock {
                    product_id: 1,
                    requested: 1,
                    available: 0,
                }
            }
        );
    }

    #[rstest]
    #[case(1, 1)]
    #[case(3, 2)]
    fn it_should_reject_when_the_cart_already_holds_the_stock(
        #[case] in_cart: u32,
        #[case] available: u32,
    ) {
        let cart = cart_of(&[(1, in_cart)]);
        let decision = decide_add_product(&cart, &ADD_ONE, &Stock::new(1, available));
        assert_eq!(
            decision,
            AddProductDecision::Rejected {
                reason: DecideError::InsufficientStock {
                    product_id: 1,
                    requested: in_cart + 1,
                    available,
                }
            }
        );
    }

    #[rstest]
    fn it_should_append_details_with_an_amount_of_one() {
        let events = append_product(make_product_details(4));
        match events.as_slice() {
            [CartEvent::ProductAdded { product }] => {
                assert_eq!(product.id, 4);
                assert_eq!(product.amount, 1);
            }
            other => panic!("expected a single ProductAdded event, got {other:?}"),
        }
    }
}
