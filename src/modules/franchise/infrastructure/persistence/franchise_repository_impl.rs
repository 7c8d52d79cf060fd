use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::FranchiseRepository;
use crate::modules::franchise::infrastructure::persistence::record::FranchiseRecord;
use crate::modules::franchise::infrastructure::persistence::store::{FranchiseStore, StoreError};
use crate::shared::application::pagination::CursorPage;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::cursor::{decode_cursor, encode_cursor};

const MAX_RETRY_ATTEMPTS: u32 = 3;
const RETRY_DELAY_MS: u64 = 100;

/// Repository over the partitioned key-value store boundary.
///
/// Writes are conditional on the stored version; on a conflict the save is
/// retried up to three times with linear backoff, rebasing the in-flight
/// aggregate onto the freshly reloaded state between attempts. The rebase
/// replaces the branch collection wholesale with the reloaded one, so a
/// concurrent branch edit on the losing side is dropped rather than merged
/// (see `tests/store_adapter_test.rs`).
pub struct FranchiseRepositoryImpl {
    store: Arc<dyn FranchiseStore>,
}

impl FranchiseRepositoryImpl {
    pub fn new(store: Arc<dyn FranchiseStore>) -> Self {
        Self { store }
    }

    /// Version 0 is a new aggregate: the write requires absence. Any later
    /// version requires the stored item to hold the predecessor version.
    fn expected_version(record: &FranchiseRecord) -> Option<u64> {
        record.version.checked_sub(1)
    }
}

#[async_trait]
impl FranchiseRepository for FranchiseRepositoryImpl {
    async fn save(&self, franchise: Franchise) -> AppResult<Franchise> {
        let mut franchise = franchise;
        let mut attempt: u32 = 0;

        loop {
            let record = FranchiseRecord::from_domain(&franchise);
            let expected = Self::expected_version(&record);

            match self.store.put_conditional(record, expected).await {
                Ok(()) => return Ok(franchise),
                Err(StoreError::ConditionFailed) => {
                    attempt += 1;
                    if attempt >= MAX_RETRY_ATTEMPTS {
                        log::error!(
                            "Max retry attempts reached for franchise: {}",
                            franchise.id()
                        );
                        return Err(AppError::ConcurrencyConflict(format!(
                            "Failed to save franchise after {} attempts due to concurrent modifications",
                            MAX_RETRY_ATTEMPTS
                        )));
                    }

                    log::warn!(
                        "Optimistic lock conflict detected for franchise: {}, attempt: {}",
                        franchise.id(),
                        attempt
                    );
                    sleep(Duration::from_millis(RETRY_DELAY_MS * attempt as u64)).await;

                    let latest = self
                        .find_by_id(franchise.id())
                        .await?
                        .ok_or_else(|| AppError::FranchiseNotFound(franchise.id().to_string()))?;

                    // Rebase onto the latest stored state: the reloaded
                    // branch list wins over the in-flight one.
                    franchise.replace_branches(latest.branches().to_vec());
                    franchise.set_version(latest.version() + 1);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Franchise>> {
        match self.store.get(id).await? {
            Some(record) => Ok(Some(record.to_domain()?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.store.delete(id).await?)
    }

    async fn find_all(
        &self,
        page_size: usize,
        cursor: Option<String>,
    ) -> AppResult<CursorPage<Franchise>> {
        let start_after = cursor.as_deref().and_then(decode_cursor);
        log::debug!(
            "Finding all franchises with pageSize: {} and cursor: {:?}",
            page_size,
            start_after
        );

        let scan = self.store.scan(page_size, start_after).await?;
        if scan.items.is_empty() {
            return Ok(CursorPage::empty());
        }

        let franchises = scan
            .items
            .iter()
            .map(FranchiseRecord::to_domain)
            .collect::<AppResult<Vec<Franchise>>>()?;

        let next_cursor = scan
            .last_evaluated_key
            .as_deref()
            .map(encode_cursor);

        log::debug!(
            "Found {} franchises, hasMore: {}",
            franchises.len(),
            next_cursor.is_some()
        );
        Ok(CursorPage::of(franchises, next_cursor))
    }
}
