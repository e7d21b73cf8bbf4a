use crate::modules::cart::adapters::outbound::cart_store::DEFAULT_CART_KEY;
use crate::modules::cart::adapters::outbound::stock_service_in_memory::InMemoryStockService;
use crate::modules::cart::cart_manager::{CartManager, CartOperations, QUANTITY_UNAVAILABLE};
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::tests::fixtures::products::{amounts, make_product_details};
use std::path::Path;
use std::sync::Arc;
use tokio::join;

type Manager = CartManager<InMemoryStockService, FileKeyValueStore, InMemoryNotifier>;

fn catalog() -> Arc<InMemoryStockService> {
    Arc::new(
        (1..=5).fold(InMemoryStockService::new(), |service, id| {
            service
                .with_stock(id, 3)
                .with_product(make_product_details(id))
        }),
    )
}

async fn open(path: &Path, stock_service: Arc<InMemoryStockService>) -> (Manager, Arc<InMemoryNotifier>) {
    let notifier = Arc::new(InMemoryNotifier::new());
    let manager = CartManager::load(
        Arc::new(FileKeyValueStore::new(path)),
        DEFAULT_CART_KEY,
        stock_service,
        notifier.clone(),
    )
    .await
    .unwrap();
    (manager, notifier)
}

#[tokio::test]
async fn restores_the_cart_after_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let stock_service = catalog();

    let (manager, notifier) = open(&path, stock_service.clone()).await;
    manager.add_product(1).await;
    manager.add_product(2).await;
    manager.add_product(1).await;
    manager
        .update_product_amount(UpdateProductAmount {
            product_id: 2,
            amount: 3,
        })
        .await;
    manager.add_product(4).await;
    manager.remove_product(4).await;
    let before = manager.cart().await;
    assert_eq!(amounts(&before), vec![(1, 2), (2, 3)]);
    assert!(notifier.messages().is_empty());
    drop(manager);

    let (reopened, _) = open(&path, stock_service).await;
    assert_eq!(reopened.cart().await, before);
}

#[tokio::test]
async fn rejects_an_add_once_the_product_reaches_its_stock() {
    let dir = tempfile::tempdir().unwrap();
    let (manager, notifier) = open(&dir.path().join("storage.json"), catalog()).await;

    manager.add_product(1).await;
    manager.add_product(2).await;
    manager.add_product(2).await;
    manager.add_product(2).await;
    assert_eq!(amounts(&manager.cart().await), vec![(1, 3), (2, 3)]);

    manager.add_product(1).await;
    assert_eq!(amounts(&manager.cart().await), vec![(1, 3), (2, 3)]);
    assert_eq!(notifier.messages(), vec![QUANTITY_UNAVAILABLE]);
}

#[tokio::test]
async fn concurrent_adds_of_different_products_all_land() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let stock_service = catalog();
    stock_service.set_delay_ms(5);

    let (manager, notifier) = open(&path, stock_service.clone()).await;
    join!(
        manager.add_product(1),
        manager.add_product(2),
        manager.add_product(3),
        manager.add_product(4),
        manager.add_product(5)
    );

    let cart = manager.cart().await;
    assert_eq!(cart.len(), 5);
    assert!(notifier.messages().is_empty());

    let (reopened, _) = open(&path, stock_service).await;
    assert_eq!(reopened.cart().await, cart);
}
