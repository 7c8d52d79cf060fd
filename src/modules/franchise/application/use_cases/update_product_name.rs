use std::sync::Arc;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Renames a product, subject to the sibling-name uniqueness invariant
/// within its branch.
pub struct UpdateProductNameUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl UpdateProductNameUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        new_name: &str,
    ) -> AppResult<Franchise> {
        log::info!(
            "Renaming product '{}' in branch '{}' of franchise '{}' to '{}'",
            product_id,
            branch_id,
            franchise_id,
            new_name
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
            .rename_product(product_id, new_name)?;
        franchise.increment_version();

        let saved = self.repository.save(franchise).await?;

        if !self
            .cache
            .set(&cache_keys::franchise(saved.id()), &saved, CACHE_TTL)
            .await
        {
            log::warn!("Failed to re-cache franchise: {}", saved.id());
        }

        log::info!("Product renamed successfully: {}", product_id);
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
    async fn test_rename_product() {
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
        let adder = AddProductUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        adder
            .execute(franchise.id(), &branch_id, "Widget", 1)
            .await
            .unwrap();
        let with_products = adder
            .execute(franchise.id(), &branch_id, "Gadget", 1)
            .await
            .unwrap();
        let gadget_id = with_products
            .find_branch(&branch_id)
            .unwrap()
            .products()
            .iter()
            .find(|p| p.name().as_str() == "Gadget")
            .unwrap()
            .id()
            .to_string();

        let use_case = UpdateProductNameUseCase::new(ctx.repository.clone(), ctx.cache.clone());

        let err = use_case
            .execute(franchise.id(), &branch_id, &gadget_id, "widget")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateEntity(_)));

        let updated = use_case
            .execute(franchise.id(), &branch_id, &gadget_id, "Sprocket")
            .await
            .unwrap();
        assert_eq!(
            updated
                .find_branch(&branch_id)
                .unwrap()
                .find_product(&gadget_id)
                .unwrap()
                .name()
                .as_str(),
            "Sprocket"
        );
    }
}
