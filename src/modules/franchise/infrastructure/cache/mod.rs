pub mod backend;
pub mod franchise_cache_adapter;

pub use backend::{CacheBackend, CacheError, InMemoryCacheBackend};
pub use franchise_cache_adapter::FranchiseCacheAdapter;
