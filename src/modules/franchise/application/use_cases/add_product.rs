use std::sync::Arc;
use uuid::Uuid;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::{Franchise, Product};
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Adds a product with a generated id and an initial stock to a branch.
pub struct AddProductUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl AddProductUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_name: &str,
        initial_stock: u32,
    ) -> AppResult<Franchise> {
        log::info!(
            "Adding product '{}' (stock {}) to branch '{}' of franchise '{}'",
            product_name,
            initial_stock,
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

        let product = Product::new(Uuid::new_v4().to_string(), product_name, initial_stock)?;
        franchise.find_branch_mut(branch_id)?.add_product(product)?;
        franchise.increment_version();

        let saved = self.repository.save(franchise).await?;

        if !self
            .cache
            .set(&cache_keys::franchise(saved.id()), &saved, CACHE_TTL)
            .await
        {
            log::warn!("Failed to re-cache franchise: {}", saved.id());
        }

        log::info!("Product added successfully to branch: {}", branch_id);
        Ok(saved)
    }
}
