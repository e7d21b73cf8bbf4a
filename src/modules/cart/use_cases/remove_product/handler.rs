use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::evolve::evolve;
use crate::modules::cart::use_cases::errors::ApplicationError;
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;
use crate::modules::cart::use_cases::remove_product::decide::decide_remove_product;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub struct RemoveProductHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    cart_store: Arc<CartStore<TStore>>,
}

impl<TStore> RemoveProductHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(cart_store: Arc<CartStore<TStore>>) -> Self {
        Self { cart_store }
    }

    pub async fn handle(&self, command: RemoveProduct) -> Result<(), ApplicationError> {
        self.cart_store
            .update_with(|cart| async move {
                Ok::<Cart, ApplicationError>(next_cart(cart, &command))
            })
            .await?;
        tracing::info!(product_id = command.product_id, "product removed from cart");
        Ok(())
    }
}

fn next_cart(cart: Cart, command: &RemoveProduct) -> Cart {
    let events = decide_remove_product(&cart, command);
    events.into_iter().fold(cart, evolve)
}
