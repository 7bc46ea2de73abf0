use crate::core::ScoreStore;
use crate::utils::error::{ReceiptError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-lifetime score table. Entries are never evicted.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    scores: RwLock<HashMap<String, u64>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn put(&self, id: &str, points: u64) {
        // A poisoned lock only means another writer panicked mid-insert; the map is still usable.
        let mut scores = self.scores.write().unwrap_or_else(|e| e.into_inner());
        scores.insert(id.to_string(), points);
    }

    fn get(&self, id: &str) -> Result<u64> {
        let scores = self.scores.read().unwrap_or_else(|e| e.into_inner());
        scores.get(id).copied().ok_or_else(|| ReceiptError::NotFound {
            id: id.to_string(),
        })
    }

    fn len(&self) -> usize {
        self.scores.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
