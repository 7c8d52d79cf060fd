/// Cross-cutting observation of use-case executions.
///
/// The calling layer wraps any use case with [`HookChain::observe`] instead
/// of sprinkling logging or counters through domain methods.
use std::sync::Arc;

use dashmap::DashMap;

use crate::shared::errors::{AppError, AppResult};

pub trait OperationHooks: Send + Sync {
    fn before(&self, _operation: &str) {}
    fn after(&self, _operation: &str) {}
    fn on_error(&self, _operation: &str, _error: &AppError) {}
}

/// Fans a single notification out to every registered hook.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn OperationHooks>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Arc<dyn OperationHooks>) {
        self.hooks.push(hook);
    }

    pub async fn observe<T, F>(&self, operation: &str, fut: F) -> AppResult<T>
    where
        F: std::future::Future<Output = AppResult<T>>,
    {
        for hook in &self.hooks {
            hook.before(operation);
        }
        match fut.await {
            Ok(value) => {
                for hook in &self.hooks {
                    hook.after(operation);
                }
                Ok(value)
            }
            Err(error) => {
                for hook in &self.hooks {
                    hook.on_error(operation, &error);
                }
                Err(error)
            }
        }
    }
}

pub struct LoggingHooks;

impl OperationHooks for LoggingHooks {
    fn before(&self, operation: &str) {
        log::debug!("Starting operation: {}", operation);
    }

    fn after(&self, operation: &str) {
        log::debug!("Completed operation: {}", operation);
    }

    fn on_error(&self, operation: &str, error: &AppError) {
        log::error!("Operation {} failed: {}", operation, error);
    }
}

/// In-process counters keyed by operation name.
#[derive(Default)]
pub struct MetricsHooks {
    started: DashMap<String, u64>,
    completed: DashMap<String, u64>,
    failed: DashMap<String, u64>,
}

impl MetricsHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started_count(&self, operation: &str) -> u64 {
        self.started.get(operation).map(|c| *c).unwrap_or(0)
    }

    pub fn completed_count(&self, operation: &str) -> u64 {
        self.completed.get(operation).map(|c| *c).unwrap_or(0)
    }

    pub fn failed_count(&self, operation: &str) -> u64 {
        self.failed.get(operation).map(|c| *c).unwrap_or(0)
    }

    fn bump(map: &DashMap<String, u64>, operation: &str) {
        *map.entry(operation.to_string()).or_insert(0) += 1;
    }
}

impl OperationHooks for MetricsHooks {
    fn before(&self, operation: &str) {
        Self::bump(&self.started, operation);
    }

    fn after(&self, operation: &str) {
        Self::bump(&self.completed, operation);
    }

    fn on_error(&self, operation: &str, _error: &AppError) {
        Self::bump(&self.failed, operation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_track_success_and_failure() {
        let metrics = Arc::new(MetricsHooks::new());
        let mut chain = HookChain::new();
        chain.register(Arc::new(LoggingHooks));
        chain.register(metrics.clone());

        let ok: AppResult<u32> = chain.observe("createFranchise", async { Ok(7) }).await;
        assert_eq!(ok.unwrap(), 7);

        let err: AppResult<u32> = chain
            .observe("createFranchise", async {
                Err(AppError::ValidationError("bad name".to_string()))
            })
            .await;
        assert!(err.is_err());

        assert_eq!(metrics.started_count("createFranchise"), 2);
        assert_eq!(metrics.completed_count("createFranchise"), 1);
        assert_eq!(metrics.failed_count("createFranchise"), 1);
        assert_eq!(metrics.failed_count("deleteFranchise"), 0);
    }

    #[tokio::test]
    async fn test_empty_chain_passes_result_through() {
        let chain = HookChain::new();
        let result: AppResult<&str> = chain.observe("listFranchises", async { Ok("page") }).await;
        assert_eq!(result.unwrap(), "page");
    }
}
