use std::sync::Arc;
use uuid::Uuid;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::AppResult;

/// Creates a franchise with a generated id, an empty branch list and
/// version 0, then primes the cache with it.
pub struct CreateFranchiseUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl CreateFranchiseUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(&self, name: &str) -> AppResult<Franchise> {
        log::info!("Creating franchise with name: {}", name);

        let franchise = Franchise::new(Uuid::new_v4().to_string(), name)?;
        let saved = self.repository.save(franchise).await?;

        if !self
            .cache
            .set(&cache_keys::franchise(saved.id()), &saved, CACHE_TTL)
            .await
        {
            log::warn!("Failed to cache franchise: {}", saved.id());
        }

        log::info!("Franchise created successfully with id: {}", saved.id());
        Ok(saved)
    }
}
