use std::sync::Arc;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Point lookup with read-through caching on the canonical key.
pub struct GetFranchiseUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl GetFranchiseUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(&self, franchise_id: &str) -> AppResult<Franchise> {
        let cache_key = cache_keys::franchise(franchise_id);

        if let Some(cached) = self.cache.get(&cache_key).await {
            return Ok(cached);
        }

        let franchise = self
            .repository
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| AppError::FranchiseNotFound(franchise_id.to_string()))?;

        self.cache.set(&cache_key, &franchise, CACHE_TTL).await;
        Ok(franchise)
    }
}
