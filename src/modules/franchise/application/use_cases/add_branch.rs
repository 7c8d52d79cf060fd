use std::sync::Arc;
use uuid::Uuid;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::{Branch, Franchise};
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Adds a branch with a generated id to an existing franchise.
pub struct AddBranchUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl AddBranchUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(&self, franchise_id: &str, branch_name: &str) -> AppResult<Franchise> {
        log::info!(
            "Adding branch '{}' to franchise '{}'",
            branch_name,
            franchise_id
        );

        self.cache
            .delete(&cache_keys::franchise(franchise_id))
            .await;

        let mut franchise = self
            .repository
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| AppError::FranchiseNotFound(franchise_id.to_string()))?;

        let branch = Branch::new(Uuid::new_v4().to_string(), branch_name)?;
        franchise.add_branch(branch)?;
        franchise.increment_version();

        let saved = self.repository.save(franchise).await?;

        if !self
            .cache
            .set(&cache_keys::franchise(saved.id()), &saved, CACHE_TTL)
            .await
        {
            log::warn!("Failed to re-cache franchise: {}", saved.id());
        }

        log::info!("Branch added successfully to franchise: {}", franchise_id);
        Ok(saved)
    }
}
