use crate::modules::cart::adapters::outbound::cart_store::{CartStore, CartStoreError};
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;

/// Loads the cart stored under `key`. An unreadable cart value starts the process with an empty
/// cart that the first change overwrites; a store that cannot be read at all is an error.
pub async fn open_cart_store<TStore>(
    store: Arc<TStore>,
    key: &str,
) -> Result<CartStore<TStore>, CartStoreError>
where
    TStore: KeyValueStore + 'static,
{
    match CartStore::load(store.clone(), key).await {
        Err(err @ CartStoreError::Corrupt(_)) => {
            tracing::warn!(%err, %key, "persisted cart unreadable, starting empty");
            Ok(CartStore::empty(store, key))
        }
        result => result,
    }
}
