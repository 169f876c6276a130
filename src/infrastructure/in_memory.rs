use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe in-memory store for receipts.
///
/// Uses `Arc<RwLock<HashMap<String, Receipt>>>` to allow shared concurrent
/// access. Entries live for the lifetime of the process; there is no expiry.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<String, Receipt>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn insert(&self, receipt: Receipt) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let mut receipts = self.receipts.write().await;
        receipts.insert(id.clone(), receipt);
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }
}
