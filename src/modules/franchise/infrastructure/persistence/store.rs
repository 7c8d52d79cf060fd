use async_trait::async_trait;
use thiserror::Error;

use crate::modules::franchise::infrastructure::persistence::record::FranchiseRecord;
use crate::shared::errors::AppError;

/// Failures signalled by the partitioned key-value store.
///
/// `ConditionFailed` is the conflict signal the retry protocol reacts to;
/// everything else propagates to the caller unmodified.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("conditional check failed")]
    ConditionFailed,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConditionFailed => {
                AppError::ConcurrencyConflict("conditional write failed".to_string())
            }
            StoreError::Unavailable(msg) => AppError::StorageError(msg),
        }
    }
}

/// One page of a limited scan in store-native key order.
///
/// `last_evaluated_key` is present iff the scan stopped before the end of
/// the table; resuming with it as `start_after` continues where the scan
/// left off.
#[derive(Debug, Clone)]
pub struct ScanPage {
    pub items: Vec<FranchiseRecord>,
    pub last_evaluated_key: Option<String>,
}

/// Boundary to the remote partitioned key-value store.
///
/// Implemented by an external collaborator in production;
/// `InMemoryFranchiseStore` ships with identical semantics for tests and
/// local wiring.
#[async_trait]
pub trait FranchiseStore: Send + Sync {
    /// Conditional write keyed on `(id, version)`. `expected_version` of
    /// `None` requires the item to be absent; `Some(v)` requires the stored
    /// version to equal `v`. A mismatch fails with
    /// `StoreError::ConditionFailed` and writes nothing.
    async fn put_conditional(
        &self,
        record: FranchiseRecord,
        expected_version: Option<u64>,
    ) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<FranchiseRecord>, StoreError>;

    /// Returns whether the item existed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    async fn scan(&self, limit: usize, start_after: Option<String>) -> Result<ScanPage, StoreError>;
}
