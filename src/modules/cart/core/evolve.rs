use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::events::CartEvent;

pub fn evolve(mut cart: Cart, event: CartEvent) -> Cart {
    match event {
        CartEvent::ProductAdded { product } => {
            cart.products_mut().push(product);
        }
        CartEvent::AllAmountsIncremented => {
            for product in cart.products_mut().iter_mut() {
                product.amount = product.amount.saturating_add(1);
            }
        }
        CartEvent::ProductRemoved { product_id } => {
            cart.products_mut().retain(|product| product.id != product_id);
        }
        CartEvent::ProductAmountUpdated { product_id, amount } => {
            for product in cart
                .products_mut()
                .iter_mut()
                .filter(|product| product.id == product_id)
            {
                product.amount = amount;
            }
        }
    }
    cart
}
