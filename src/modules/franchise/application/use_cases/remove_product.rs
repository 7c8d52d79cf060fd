use std::sync::Arc;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Removes a product from a branch.
pub struct RemoveProductUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl RemoveProductUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
    ) -> AppResult<Franchise> {
        log::info!(
            "Removing product '{}' from branch '{}' of franchise '{}'",
            product_id,
            branch_id,
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

        franchise
            .find_branch_mut(branch_id)?
            .remove_product(product_id)?;
        franchise.increment_version();

        let saved = self.repository.save(franchise).await?;

        if !self
            .cache
            .set(&cache_keys::franchise(saved.id()), &saved, CACHE_TTL)
            .await
        {
            log::warn!("Failed to re-cache franchise: {}", saved.id());
        }

        log::info!("Product removed successfully from branch: {}", branch_id);
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::franchise::application::use_cases::test_support::context;
    use crate::modules::franchise::application::use_cases::{
        AddBranchUseCase, AddProductUseCase, CreateFranchiseUseCase,
    };

    #[tokio::test]
    async fn test_remove_product_and_not_found() {
        let ctx = context();
        let franchise = CreateFranchiseUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute("Acme")
            .await
            .unwrap();
        let with_branch = AddBranchUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute(franchise.id(), "North")
            .await
            .unwrap();
        let branch_id = with_branch.branches()[0].id().to_string();
        let with_product = AddProductUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute(franchise.id(), &branch_id, "Widget", 5)
            .await
            .unwrap();
        let product_id = with_product.find_branch(&branch_id).unwrap().products()[0]
            .id()
            .to_string();

        let use_case = RemoveProductUseCase::new(ctx.repository.clone(), ctx.cache.clone());

        let err = use_case
            .execute(franchise.id(), &branch_id, "ghost")
            .await
            .unwrap_err();
        assert_eq!(err, AppError::ProductNotFound("ghost".to_string()));

        let updated = use_case
            .execute(franchise.id(), &branch_id, &product_id)
            .await
            .unwrap();
        assert_eq!(updated.find_branch(&branch_id).unwrap().product_count(), 0);
        assert_eq!(updated.version(), 3);
    }
}
