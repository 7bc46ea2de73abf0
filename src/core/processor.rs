use crate::core::points::calculate_points;
use crate::core::validator::validate_receipt;
use crate::core::ScoreStore;
use crate::domain::model::{Receipt, ScoreRecord};
use crate::utils::error::Result;
use uuid::Uuid;

/// Runs receipts through validate -> score -> store and answers lookups.
pub struct ReceiptProcessor<S: ScoreStore> {
    store: S,
}

impl<S: ScoreStore> ReceiptProcessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Nothing is stored unless the receipt validates.
    pub fn process(&self, receipt: Receipt) -> Result<ScoreRecord> {
        let retailer = receipt.retailer.clone();
        let validated = validate_receipt(receipt).inspect_err(|e| {
            tracing::warn!("Rejected receipt from {:?}: {}", retailer, e);
        })?;

        let points = calculate_points(&validated);
        let id = Uuid::new_v4().to_string();
        self.store.put(&id, points);

        tracing::info!("Processed receipt {} ({} items): {} points", id, validated.items.len(), points);
        Ok(ScoreRecord { id, points })
    }

    pub fn points(&self, id: &str) -> Result<u64> {
        self.store.get(id).inspect_err(|_| {
            tracing::debug!("Lookup miss for receipt {}", id);
        })
    }
}
