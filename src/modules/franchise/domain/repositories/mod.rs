pub mod franchise_cache;
pub mod franchise_repository;

pub use franchise_cache::{cache_keys, FranchiseCache};
pub use franchise_repository::FranchiseRepository;
