use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::FranchiseCache;
use crate::modules::franchise::infrastructure::cache::backend::CacheBackend;

/// Cache coordinator: the non-throwing `FranchiseCache` port over a fallible
/// backend. Every backend or (de)serialization fault is logged and reported
/// as a miss or a failed write; a cache problem can never fail a caller.
pub struct FranchiseCacheAdapter {
    backend: Arc<dyn CacheBackend>,
}

impl FranchiseCacheAdapter {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl FranchiseCache for FranchiseCacheAdapter {
    async fn get(&self, key: &str) -> Option<Franchise> {
        let raw = match self.backend.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Cache GET error for key: {}. Falling back to miss: {}", key, e);
                return None;
            }
        };

        match raw {
            Some(json) => match serde_json::from_str::<Franchise>(&json) {
                Ok(franchise) => {
                    log::debug!("Cache HIT for key: {}", key);
                    Some(franchise)
                }
                Err(e) => {
                    log::warn!("Discarding undecodable cache entry for key: {}: {}", key, e);
                    None
                }
            },
            None => {
                log::debug!("Cache MISS for key: {}", key);
                None
            }
        }
    }

    async fn set(&self, key: &str, franchise: &Franchise, ttl: Duration) -> bool {
        let json = match serde_json::to_string(franchise) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cache SET skipped for key: {}: {}", key, e);
                return false;
            }
        };

        match self.backend.set(key, json, ttl).await {
            Ok(()) => {
                log::debug!("Cache SET success for key: {} with TTL: {:?}", key, ttl);
                true
            }
            Err(e) => {
                log::warn!("Cache SET error for key: {}. Falling back to false: {}", key, e);
                false
            }
        }
    }

    async fn delete(&self, key: &str) -> bool {
        match self.backend.delete(key).await {
            Ok(deleted) => {
                if deleted {
                    log::debug!("Cache DELETE success for key: {}", key);
                } else {
                    log::debug!("Cache DELETE: key not found: {}", key);
                }
                deleted
            }
            Err(e) => {
                log::warn!(
                    "Cache DELETE error for key: {}. Falling back to false: {}",
                    key,
                    e
                );
                false
            }
        }
    }
}
