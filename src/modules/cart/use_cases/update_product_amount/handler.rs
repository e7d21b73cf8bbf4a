use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::adapters::outbound::stock_service::StockService;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::Decision;
use crate::modules::cart::core::evolve::evolve;
use crate::modules::cart::use_cases::errors::ApplicationError;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::update_product_amount::decide::decide_update_product_amount;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub struct UpdateProductAmountHandler<TStockService, TStore>
where
    TStockService: StockService + 'static,
    TStore: KeyValueStore + 'static,
{
    cart_store: Arc<CartStore<TStore>>,
    stock_service: Arc<TStockService>,
}

impl<TStockService, TStore> UpdateProductAmountHandler<TStockService, TStore>
where
    TStockService: StockService + 'static,
    TStore: KeyValueStore + 'static,
{
    pub fn new(cart_store: Arc<CartStore<TStore>>, stock_service: Arc<TStockService>) -> Self {
        Self {
            cart_store,
            stock_service,
        }
    }

    pub async fn handle(&self, command: UpdateProductAmount) -> Result<(), ApplicationError> {
        self.cart_store
            .update_with(|cart| self.next_cart(cart, command))
            .await?;
        tracing::info!(
            product_id = command.product_id,
            amount = command.amount,
            "product amount updated"
        );
        Ok(())
    }

    async fn next_cart(
        &self,
        cart: Cart,
        command: UpdateProductAmount,
    ) -> Result<Cart, ApplicationError> {
        let stock = self.stock_service.get_stock(command.product_id).await?;
        match decide_update_product_amount(&cart, &command, &stock) {
            Decision::Accepted { events } => Ok(events.into_iter().fold(cart, evolve)),
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
