use std::sync::Arc;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Derived view: per branch, the single product holding the most stock.
/// Cached under its own key so canonical reads stay unaffected.
pub struct GetMaxStockProductsUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl GetMaxStockProductsUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(&self, franchise_id: &str) -> AppResult<Franchise> {
        let cache_key = cache_keys::max_stock(franchise_id);

        if let Some(cached) = self.cache.get(&cache_key).await {
            return Ok(cached);
        }

        let franchise = self
            .repository
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| AppError::FranchiseNotFound(franchise_id.to_string()))?;

        let view = franchise.max_stock_per_branch();
        self.cache.set(&cache_key, &view, CACHE_TTL).await;
        Ok(view)
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
    async fn test_view_keeps_only_top_product_per_branch() {
        let ctx = context();
        let franchise = CreateFranchiseUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute("Acme")
            .await
            .unwrap();
        let add_branch = AddBranchUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        let with_branch = add_branch.execute(franchise.id(), "Downtown").await.unwrap();
        let branch_id = with_branch.branches()[0].id().to_string();

        let add_product = AddProductUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        add_product
            .execute(franchise.id(), &branch_id, "Widget", 5)
            .await
            .unwrap();
        add_product
            .execute(franchise.id(), &branch_id, "Gadget", 9)
            .await
            .unwrap();

        let use_case = GetMaxStockProductsUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        let view = use_case.execute(franchise.id()).await.unwrap();

        assert_eq!(view.branches().len(), 1);
        let products = view.branches()[0].products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name().as_str(), "Gadget");
        assert_eq!(products[0].stock().value(), 9);
    }

    #[tokio::test]
    async fn test_empty_branches_are_dropped() {
        let ctx = context();
        let franchise = CreateFranchiseUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute("Acme")
            .await
            .unwrap();
        AddBranchUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute(franchise.id(), "Empty branch")
            .await
            .unwrap();

        let use_case = GetMaxStockProductsUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        let view = use_case.execute(franchise.id()).await.unwrap();
        assert!(view.branches().is_empty());
    }

    #[tokio::test]
    async fn test_view_is_cached_under_its_own_key() {
        let ctx = context();
        let franchise = CreateFranchiseUseCase::new(ctx.repository.clone(), ctx.cache.clone())
            .execute("Acme")
            .await
            .unwrap();

        let use_case = GetMaxStockProductsUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        use_case.execute(franchise.id()).await.unwrap();

        assert!(ctx
            .cache
            .get(&cache_keys::max_stock(franchise.id()))
            .await
            .is_some());
    }

    #[tokio::test]
    async fn test_missing_franchise() {
        let ctx = context();
        let use_case = GetMaxStockProductsUseCase::new(ctx.repository.clone(), ctx.cache.clone());
        let err = use_case.execute("ghost").await.unwrap_err();
        assert_eq!(err, AppError::FranchiseNotFound("ghost".to_string()));
    }
}
