use std::sync::Arc;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Renames a franchise.
pub struct UpdateFranchiseNameUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl UpdateFranchiseNameUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(&self, franchise_id: &str, new_name: &str) -> AppResult<Franchise> {
        log::info!("Renaming franchise '{}' to '{}'", franchise_id, new_name);

        self.cache
            .delete(&cache_keys::franchise(franchise_id))
            .await;

        let mut franchise = self
            .repository
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| AppError::FranchiseNotFound(franchise_id.to_string()))?;

        franchise.update_name(new_name)?;
        franchise.increment_version();

        let saved = self.repository.save(franchise).await?;

        if !self
            .cache
            .set(&cache_keys::franchise(saved.id()), &saved, CACHE_TTL)
            .await
        {
            log::warn!("Failed to re-cache franchise: {}", saved.id());
        }

        log::info!("Franchise renamed successfully: {}", franchise_id);
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::franchise::application::use_cases::test_support::context;
    use crate::modules::franchise::application::use_cases::CreateFranchiseUseCase;

    #[tokio::test]
    async fn test_rename_franchise() {
        let ctx = context();
        let franchise = CreateFranchiseUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute("Acme")
            .await
            .unwrap();

        let use_case = UpdateFranchiseNameUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        let updated = use_case.execute(franchise.id(), "Acme Global").await.unwrap();

        assert_eq!(updated.name().as_str(), "Acme Global");
        assert_eq!(updated.version(), 1);
    }

    #[tokio::test]
    async fn test_invalid_name_persists_nothing() {
        let ctx = context();
        let franchise = CreateFranchiseUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute("Acme")
            .await
            .unwrap();

        let use_case = UpdateFranchiseNameUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        let err = use_case.execute(franchise.id(), "bad;name").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let stored = ctx
            .repository
            .find_by_id(franchise.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name().as_str(), "Acme");
        assert_eq!(stored.version(), 0);
    }
}
