use std::sync::Arc;

use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Deletes a whole aggregate: both cache entries (canonical and derived
/// view) are invalidated, then the stored item is removed.
pub struct DeleteFranchiseUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl DeleteFranchiseUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(&self, franchise_id: &str) -> AppResult<()> {
        log::info!("Deleting franchise: {}", franchise_id);

        self.cache
            .delete(&cache_keys::franchise(franchise_id))
            .await;
        self.cache
            .delete(&cache_keys::max_stock(franchise_id))
            .await;

        let existed = self.repository.delete(franchise_id).await?;
        if !existed {
            return Err(AppError::FranchiseNotFound(franchise_id.to_string()));
        }

        log::info!("Franchise deleted successfully: {}", franchise_id);
        Ok(())
    }
}
