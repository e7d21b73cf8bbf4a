// Versioned in-memory cart with write-through to a KeyValueStore.
//
// Responsibilities
// - Load the persisted cart once at construction (empty when the key is absent).
// - Hand out snapshots tagged with a version and accept a new cart only against the version it
//   was computed from.
// - Run read-modify-write updates one at a time: `update_with` holds a writer guard from the
//   snapshot to the commit, so concurrent operations queue instead of overwriting each other.
// - Serialize every accepted cart to the store immediately. A write is skipped when the cart is
//   equal by content to the last value written; a failed write is logged and never surfaced.

use crate::modules::cart::core::cart::Cart;
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: u64, actual: u64 },

    #[error(transparent)]
    Storage(#[from] KeyValueStoreError),

    #[error("stored cart is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub cart: Cart,
    pub version: u64,
}

struct CartRecord {
    cart: Cart,
    version: u64,
    persisted: Option<Cart>,
}

pub struct CartStore<TStore>
where
    TStore: KeyValueStore + 'static,
{
    key: String,
    store: Arc<TStore>,
    record: RwLock<CartRecord>,
    writer: Mutex<()>,
}

impl<TStore> CartStore<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub async fn load(store: Arc<TStore>, key: impl Into<String>) -> Result<Self, CartStoreError> {
        let key = key.into();
        let persisted = match store.get(&key).await? {
            Some(raw) => Some(serde_json::from_str::<Cart>(&raw)?),
            None => None,
        };
        let cart = persisted.clone().unwrap_or_default();
        tracing::info!(%key, entries = cart.len(), "cart loaded");
        Ok(Self::with_record(store, key, cart, persisted))
    }

    /// Starts from an empty cart without reading the store. The first commit overwrites the key.
    pub fn empty(store: Arc<TStore>, key: impl Into<String>) -> Self {
        Self::with_record(store, key.into(), Cart::new(), None)
    }

    fn with_record(store: Arc<TStore>, key: String, cart: Cart, persisted: Option<Cart>) -> Self {
        Self {
            key,
            store,
            record: RwLock::new(CartRecord {
                cart,
                version: 0,
                persisted,
            }),
            writer: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn snapshot(&self) -> CartSnapshot {
        let record = self.record.read().await;
        CartSnapshot {
            cart: record.cart.clone(),
            version: record.version,
        }
    }

    pub async fn cart(&self) -> Cart {
        self.record.read().await.cart.clone()
    }

    /// Replaces the cart if nothing was committed since `expected_version`. Returns the new version.
    pub async fn commit(&self, expected_version: u64, cart: Cart) -> Result<u64, CartStoreError> {
        let mut record = self.record.write().await;
        if record.version != expected_version {
            return Err(CartStoreError::VersionMismatch {
                expected: expected_version,
                actual: record.version,
            });
        }
        record.cart = cart;
        record.version += 1;
        if record.persisted.as_ref() != Some(&record.cart) {
            self.write_through(&mut record).await;
        }
        Ok(record.version)
    }

    /// Read-modify-write under the writer guard: `step` computes the next cart from a fresh
    /// snapshot and the result is committed against that snapshot's version. Concurrent callers
    /// wait for the guard, so each step sees every earlier commit.
    pub async fn update_with<F, Fut, E>(&self, step: F) -> Result<(), E>
    where
        F: FnOnce(Cart) -> Fut,
        Fut: Future<Output = Result<Cart, E>>,
        E: From<CartStoreError>,
    {
        let _writer = self.writer.lock().await;
        let snapshot = self.snapshot().await;
        let next = step(snapshot.cart).await?;
        self.commit(snapshot.version, next).await?;
        Ok(())
    }

    async fn write_through(&self, record: &mut CartRecord) {
        let payload = match serde_json::to_string(&record.cart) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "could not serialize cart");
                return;
            }
        };
        match self.store.set(&self.key, payload).await {
            Ok(()) => record.persisted = Some(record.cart.clone()),
            Err(err) => tracing::warn!(key = %self.key, %err, "cart write-through failed"),
        }
    }
}
