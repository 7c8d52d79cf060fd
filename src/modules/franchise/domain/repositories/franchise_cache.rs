use async_trait::async_trait;
use std::time::Duration;

use crate::modules::franchise::domain::entities::Franchise;

/// Cache port for franchise aggregates.
///
/// Deliberately non-throwing: implementations absorb every underlying fault
/// and report it as a miss (`None`) or a failed write (`false`). Callers
/// treat the cache as best-effort and never depend on it for correctness.
#[async_trait]
pub trait FranchiseCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<Franchise>;

    async fn set(&self, key: &str, franchise: &Franchise, ttl: Duration) -> bool;

    async fn delete(&self, key: &str) -> bool;
}

/// Key scheme for cached aggregates. The canonical entry and the derived
/// max-stock view are cached and invalidated independently.
pub mod cache_keys {
    pub fn franchise(id: &str) -> String {
        format!("franchise:{}", id)
    }

    pub fn max_stock(id: &str) -> String {
        format!("franchise:max-stock:{}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_scheme() {
        assert_eq!(cache_keys::franchise("abc"), "franchise:abc");
        assert_eq!(cache_keys::max_stock("abc"), "franchise:max-stock:abc");
    }
}
