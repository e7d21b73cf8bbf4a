use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::adapters::outbound::stock_service::StockService;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::evolve::evolve;
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::modules::cart::use_cases::add_product::decide::{
    AddProductDecision, append_product, decide_add_product,
};
use crate::modules::cart::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

pub struct AddProductHandler<TStockService, TStore>
where
    TStockService: StockService + 'static,
    TStore: KeyValueStore + 'static,
{
    cart_store: Arc<CartStore<TStore>>,
    stock_service: Arc<TStockService>,
}

impl<TStockService, TStore> AddProductHandler<TStockService, TStore>
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

    pub async fn handle(&self, command: AddProduct) -> Result<(), ApplicationError> {
        self.cart_store
            .update_with(|cart| self.next_cart(cart, command))
            .await?;
        tracing::info!(product_id = command.product_id, "product added to cart");
        Ok(())
    }

    async fn next_cart(&self, cart: Cart, command: AddProduct) -> Result<Cart, ApplicationError> {
        let stock = self.stock_service.get_stock(command.product_id).await?;
        let events = match decide_add_product(&cart, &command, &stock) {
            AddProductDecision::Rejected { reason } => return Err(reason.into()),
            AddProductDecision::IncrementAll { events } => events,
            AddProductDecision::FetchDetails => {
                let details = self.stock_service.get_product(command.product_id).await?;
                append_product(details)
            }
        };
        Ok(events.into_iter().fold(cart, evolve))
    }
}
