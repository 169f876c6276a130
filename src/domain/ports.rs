use super::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;

/// Storage port for accepted receipts.
///
/// Insert-only: receipts are never updated or deleted, and identifiers are
/// generated by the store so callers cannot collide on keys.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under a freshly generated identifier and returns it.
    async fn insert(&self, receipt: Receipt) -> Result<String>;

    /// Returns the receipt stored under `id`, if any.
    async fn get(&self, id: &str) -> Result<Option<Receipt>>;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
