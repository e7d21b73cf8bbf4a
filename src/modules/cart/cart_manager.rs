// Public face of the cart: one instance per process, built in the composition root and shared.
//
// Every operation absorbs its own failures. Rejections and faults are reported to the Notifier
// and logged; callers only ever observe the resulting cart.

use crate::modules::cart::adapters::outbound::cart_store::{CartStore, CartStoreError};
use crate::modules::cart::adapters::outbound::stock_service::StockService;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::modules::cart::use_cases::add_product::handler::AddProductHandler;
use crate::modules::cart::use_cases::errors::ApplicationError;
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;
use crate::modules::cart::use_cases::remove_product::handler::RemoveProductHandler;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::update_product_amount::handler::UpdateProductAmountHandler;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shared::infrastructure::notifier::Notifier;
use async_trait::async_trait;
use std::sync::Arc;

pub const QUANTITY_UNAVAILABLE: &str = "requested quantity unavailable";
pub const ADD_PRODUCT_FAILED: &str = "error adding product";
pub const REMOVE_PRODUCT_FAILED: &str = "error removing product";
pub const UPDATE_PRODUCT_AMOUNT_FAILED: &str = "error updating product quantity";

#[async_trait]
pub trait CartOperations: Send + Sync {
    async fn cart(&self) -> Cart;
    async fn add_product(&self, product_id: ProductId);
    async fn remove_product(&self, product_id: ProductId);
    async fn update_product_amount(&self, command: UpdateProductAmount);
}

pub struct CartManager<TStockService, TStore, TNotifier>
where
    TStockService: StockService + 'static,
    TStore: KeyValueStore + 'static,
    TNotifier: Notifier + 'static,
{
    cart_store: Arc<CartStore<TStore>>,
    add_product: AddProductHandler<TStockService, TStore>,
    remove_product: RemoveProductHandler<TStore>,
    update_product_amount: UpdateProductAmountHandler<TStockService, TStore>,
    notifier: Arc<TNotifier>,
}

impl<TStockService, TStore, TNotifier> CartManager<TStockService, TStore, TNotifier>
where
    TStockService: StockService + 'static,
    TStore: KeyValueStore + 'static,
    TNotifier: Notifier + 'static,
{
    pub fn new(
        cart_store: Arc<CartStore<TStore>>,
        stock_service: Arc<TStockService>,
        notifier: Arc<TNotifier>,
    ) -> Self {
        Self {
            add_product: AddProductHandler::new(cart_store.clone(), stock_service.clone()),
            remove_product: RemoveProductHandler::new(cart_store.clone()),
            update_product_amount: UpdateProductAmountHandler::new(
                cart_store.clone(),
                stock_service,
            ),
            cart_store,
            notifier,
        }
    }

    /// Reads the persisted cart under `key` and builds a manager around it.
    pub async fn load(
        store: Arc<TStore>,
        key: impl Into<String>,
        stock_service: Arc<TStockService>,
        notifier: Arc<TNotifier>,
    ) -> Result<Self, CartStoreError> {
        let cart_store = CartStore::load(store, key).await?;
        Ok(Self::new(Arc::new(cart_store), stock_service, notifier))
    }

    fn report(&self, failure_message: &str, result: Result<(), ApplicationError>) {
        match result {
            Ok(()) => {}
            Err(ApplicationError::Domain(reason)) => {
                tracing::warn!(?reason, "cart change rejected");
                self.notifier.notify_error(QUANTITY_UNAVAILABLE);
            }
            Err(err) => {
                tracing::error!(%err, "{failure_message}");
                self.notifier.notify_error(failure_message);
            }
        }
    }
}

#[async_trait]
impl<TStockService, TStore, TNotifier> CartOperations
    for CartManager<TStockService, TStore, TNotifier>
where
    TStockService: StockService + 'static,
    TStore: KeyValueStore + 'static,
    TNotifier: Notifier + 'static,
{
    async fn cart(&self) -> Cart {
        self.cart_store.cart().await
    }

    async fn add_product(&self, product_id: ProductId) {
        let result = self.add_product.handle(AddProduct { product_id }).await;
        self.report(ADD_PRODUCT_FAILED, result);
    }

    async fn remove_product(&self, product_id: ProductId) {
        let result = self
            .remove_product
            .handle(RemoveProduct { product_id })
            .await;
        self.report(REMOVE_PRODUCT_FAILED, result);
    }

    async fn update_product_amount(&self, command: UpdateProductAmount) {
        let result = self.update_product_amount.handle(command).await;
        self.report(UPDATE_PRODUCT_AMOUNT_FAILED, result);
    }
}
