use async_trait::async_trait;

use crate::modules::franchise::domain::entities::Franchise;
use crate::shared::application::pagination::CursorPage;
use crate::shared::errors::AppResult;

/// Persistence port for the franchise aggregate.
///
/// `save` carries the optimistic-concurrency contract: implementations must
/// retry conditional-write conflicts internally and surface only
/// `AppError::ConcurrencyConflict` once retries are exhausted. All other
/// storage failures propagate unmodified.
#[async_trait]
pub trait FranchiseRepository: Send + Sync {
    async fn save(&self, franchise: Franchise) -> AppResult<Franchise>;

    /// Point lookup by id; absence is not an error.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Franchise>>;

    /// Removes the whole aggregate; returns whether it existed.
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// Cursor-based listing in store-native order. `page_size` must already
    /// be validated by the caller.
    async fn find_all(
        &self,
        page_size: usize,
        cursor: Option<String>,
    ) -> AppResult<CursorPage<Franchise>>;
}
