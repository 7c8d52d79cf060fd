use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::franchise::infrastructure::persistence::record::FranchiseRecord;
use crate::modules::franchise::infrastructure::persistence::store::{
    FranchiseStore, ScanPage, StoreError,
};

/// In-memory store with the same conditional-write and scan semantics as
/// the remote table: writes are atomic per key, scans run in key order, and
/// a scan that stops at the limit reports the last key seen.
#[derive(Default)]
pub struct InMemoryFranchiseStore {
    items: RwLock<BTreeMap<String, FranchiseRecord>>,
}

impl InMemoryFranchiseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl FranchiseStore for InMemoryFranchiseStore {
    async fn put_conditional(
        &self,
        record: FranchiseRecord,
        expected_version: Option<u64>,
    ) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let stored_version = items.get(&record.id).map(|r| r.version);

        match (expected_version, stored_version) {
            (None, None) => {}
            (Some(expected), Some(stored)) if expected == stored => {}
            _ => return Err(StoreError::ConditionFailed),
        }

        items.insert(record.id.clone(), record);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<FranchiseRecord>, StoreError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.items.write().await.remove(id).is_some())
    }

    async fn scan(&self, limit: usize, start_after: Option<String>) -> Result<ScanPage, StoreError> {
        let items = self.items.read().await;

        let mut iter: Box<dyn Iterator<Item = &FranchiseRecord>> = match &start_after {
            Some(key) => Box::new(
                items
                    .range::<String, _>((
                        std::ops::Bound::Excluded(key.clone()),
                        std::ops::Bound::Unbounded,
                    ))
                    .map(|(_, record)| record),
            ),
            None => Box::new(items.values()),
        };

        let mut page: Vec<FranchiseRecord> = Vec::new();
        while page.len() < limit {
            match iter.next() {
                Some(record) => page.push(record.clone()),
                None => break,
            }
        }

        let more_remaining = iter.next().is_some();

        let last_evaluated_key = if more_remaining {
            page.last().map(|record| record.id.clone())
        } else {
            None
        };

        Ok(ScanPage {
            items: page,
            last_evaluated_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, version: u64) -> FranchiseRecord {
        FranchiseRecord {
            id: id.to_string(),
            name: format!("Franchise {}", id),
            branches: Vec::new(),
            version,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_put_new_requires_absence() {
        let store = InMemoryFranchiseStore::new();
        store.put_conditional(record("a", 0), None).await.unwrap();
        let err = store.put_conditional(record("a", 0), None).await.unwrap_err();
        assert!(matches!(err, StoreError::ConditionFailed));
    }

    #[tokio::test]
    async fn test_put_checks_stored_version() {
        let store = InMemoryFranchiseStore::new();
        store.put_conditional(record("a", 0), None).await.unwrap();

        // matching version succeeds
        store
            .put_conditional(record("a", 1), Some(0))
            .await
            .unwrap();
        assert_eq!(store.get("a").await.unwrap().unwrap().version, 1);

        // stale version fails and writes nothing
        let err = store
            .put_conditional(record("a", 1), Some(0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ConditionFailed));
        assert_eq!(store.get("a").await.unwrap().unwrap().version, 1);
    }

    #[tokio::test]
    async fn test_put_expecting_version_on_missing_item_fails() {
        let store = InMemoryFranchiseStore::new();
        let err = store
            .put_conditional(record("a", 1), Some(0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ConditionFailed));
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let store = InMemoryFranchiseStore::new();
        store.put_conditional(record("a", 0), None).await.unwrap();
        assert!(store.delete("a").await.unwrap());
        assert!(!store.delete("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_scan_pages_in_key_order() {
        let store = InMemoryFranchiseStore::new();
        for id in ["c", "a", "d", "b", "e"] {
            store.put_conditional(record(id, 0), None).await.unwrap();
        }

        let first = store.scan(2, None).await.unwrap();
        let ids: Vec<&str> = first.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(first.last_evaluated_key.as_deref(), Some("b"));

        let second = store.scan(2, first.last_evaluated_key).await.unwrap();
        let ids: Vec<&str> = second.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "d"]);

        let last = store.scan(2, second.last_evaluated_key).await.unwrap();
        let ids: Vec<&str> = last.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["e"]);
        assert!(last.last_evaluated_key.is_none());
    }

    #[tokio::test]
    async fn test_scan_with_one_item_beyond_limit_keeps_it_reachable() {
        let store = InMemoryFranchiseStore::new();
        for id in ["a", "b", "c"] {
            store.put_conditional(record(id, 0), None).await.unwrap();
        }

        // the look-ahead for "c" must not consume it from the page sequence
        let first = store.scan(2, None).await.unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.last_evaluated_key.as_deref(), Some("b"));

        let second = store.scan(2, first.last_evaluated_key).await.unwrap();
        let ids: Vec<&str> = second.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
        assert!(second.last_evaluated_key.is_none());
    }

    #[tokio::test]
    async fn test_scan_exactly_at_end_has_no_cursor() {
        let store = InMemoryFranchiseStore::new();
        store.put_conditional(record("a", 0), None).await.unwrap();
        store.put_conditional(record("b", 0), None).await.unwrap();

        let page = store.scan(2, None).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.last_evaluated_key.is_none());
    }

    #[tokio::test]
    async fn test_scan_empty_store() {
        let store = InMemoryFranchiseStore::new();
        let page = store.scan(10, None).await.unwrap();
        assert!(page.items.is_empty());
        assert!(page.last_evaluated_key.is_none());
    }
}
