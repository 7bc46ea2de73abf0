use crate::utils::error::Result;

/// Id → points lookup table. Implementations synchronize internally so callers
/// can share one instance across request handlers without extra locking.
pub trait ScoreStore: Send + Sync {
    /// Registers a score. Ids are minted by the caller and assumed unique.
    fn put(&self, id: &str, points: u64);
    fn get(&self, id: &str) -> Result<u64>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
