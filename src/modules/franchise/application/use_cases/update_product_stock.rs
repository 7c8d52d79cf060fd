use std::sync::Arc;

use crate::modules::franchise::application::use_cases::CACHE_TTL;
use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::{
    cache_keys, FranchiseCache, FranchiseRepository,
};
use crate::shared::errors::{AppError, AppResult};

/// Stock mutation applied to a product.
#[derive(Debug, Clone, Copy)]
pub enum StockUpdate {
    /// Replace the stock with an absolute value.
    Set(u32),
    /// Add to the current stock; fails above 1_000_000.
    Increment(u32),
    /// Subtract from the current stock; fails below 0.
    Decrement(u32),
}

/// Restocks a product: absolute set, increment or decrement, each
/// independently validated by the domain.
pub struct UpdateProductStockUseCase {
    repository: Arc<dyn FranchiseRepository>,
    cache: Arc<dyn FranchiseCache>,
}

impl UpdateProductStockUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>, cache: Arc<dyn FranchiseCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn execute(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        update: StockUpdate,
    ) -> AppResult<Franchise> {
        log::info!(
            "Updating stock of product '{}' in branch '{}' of franchise '{}': {:?}",
            product_id,
            branch_id,
            franchise_id,
            update
        );

        self.cache
            .delete(&cache_keys::franchise(franchise_id))
            .await;

        let mut franchise = self
            .repository
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| AppError::FranchiseNotFound(franchise_id.to_string()))?;

        let product = franchise
            .find_branch_mut(branch_id)?
            .find_product_mut(product_id)?;
        match update {
            StockUpdate::Set(stock) => product.update_stock(stock)?,
            StockUpdate::Increment(quantity) => product.increment_stock(quantity)?,
            StockUpdate::Decrement(quantity) => product.decrement_stock(quantity)?,
        }
        franchise.increment_version();

        let saved = self.repository.save(franchise).await?;

        if !self
            .cache
            .set(&cache_keys::franchise(saved.id()), &saved, CACHE_TTL)
            .await
        {
            log::warn!("Failed to re-cache franchise: {}", saved.id());
        }

        log::info!("Product stock updated successfully: {}", product_id);
        Ok(saved)
    }
}
