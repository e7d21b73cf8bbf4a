use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::events::CartEvent;
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;

/// Removal never consults stock and never rejects. Removing an absent product yields the same cart.
pub fn decide_remove_product(_cart: &Cart, command: &RemoveProduct) -> Vec<CartEvent> {
    vec![CartEvent::ProductRemoved {
        product_id: command.product_id,
    }]
}
