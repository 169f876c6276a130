use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::Receipt;
use crate::domain::{scoring, validator};
use crate::error::{ReceiptError, Result};

/// Orchestrates receipt intake and points lookups.
///
/// Owns the storage backend behind the `ReceiptStore` port. All methods are
/// safe to call concurrently; the store handles its own synchronization.
pub struct ReceiptProcessor {
    store: ReceiptStoreBox,
}

impl ReceiptProcessor {
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Validates a receipt and stores it, returning the generated identifier.
    ///
    /// Validation failures carry the specific rule that failed; the boundary
    /// is responsible for flattening them into a uniform client response.
    pub async fn process_receipt(&self, receipt: Receipt) -> Result<String> {
        validator::validate(&receipt)?;
        let id = self.store.insert(receipt).await?;
        tracing::info!(%id, "stored new receipt");
        Ok(id)
    }

    /// Returns the points for a previously stored receipt.
    ///
    /// The score is recomputed on every call; stored receipts are immutable
    /// so the result is stable for a given identifier.
    pub async fn get_points(&self, id: &str) -> Result<i64> {
        let receipt = self.store.get(id).await?.ok_or(ReceiptError::NotFound)?;
        let points = scoring::score(&receipt);
        tracing::debug!(%id, points, "computed receipt points");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::receipt::Item;
    use crate::error::ValidationError;
    use crate::infrastructure::in_memory::InMemoryReceiptStore;

    fn processor() -> ReceiptProcessor {
        ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new()))
    }

    fn sample_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2024-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Mountain Dew".to_string(),
                price: "1.25".to_string(),
            }],
            total: "35.35".to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_then_get_points() {
        let processor = processor();
        let id = processor.process_receipt(sample_receipt()).await.unwrap();

        let points = processor.get_points(&id).await.unwrap();
        assert!(points >= 0);
        // 6 retailer + 6 odd day + 1 for "Mountain Dew" (12 chars, %3 == 0,
        // ceil(1.25 * 0.2) = 1); nothing else matches.
        assert_eq!(points, 13);
    }

    #[tokio::test]
    async fn test_points_recomputation_is_stable() {
        let processor = processor();
        let id = processor.process_receipt(sample_receipt()).await.unwrap();

        let first = processor.get_points(&id).await.unwrap();
        for _ in 0..5 {
            assert_eq!(processor.get_points(&id).await.unwrap(), first);
        }
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_rejected_with_specific_kind() {
        let processor = processor();
        let mut receipt = sample_receipt();
        receipt.retailer = "Target@#$".to_string();

        let err = processor.process_receipt(receipt).await.unwrap_err();
        assert!(matches!(
            err,
            ReceiptError::Validation(ValidationError::InvalidRetailer)
        ));
    }

    #[tokio::test]
    async fn test_rejection_leaves_processor_usable() {
        let processor = processor();

        let mut bad = sample_receipt();
        bad.items.clear();
        assert!(matches!(
            processor.process_receipt(bad).await,
            Err(ReceiptError::Validation(ValidationError::NoItems))
        ));

        let id = processor.process_receipt(sample_receipt()).await.unwrap();
        assert_eq!(processor.get_points(&id).await.unwrap(), 13);
    }

    #[tokio::test]
    async fn test_get_points_unknown_id() {
        let processor = processor();
        let err = processor.get_points("missing").await.unwrap_err();
        assert!(matches!(err, ReceiptError::NotFound));
    }
}
