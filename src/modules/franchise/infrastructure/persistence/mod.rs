pub mod franchise_repository_impl;
pub mod in_memory_store;
pub mod record;
pub mod store;

pub use franchise_repository_impl::FranchiseRepositoryImpl;
pub use in_memory_store::InMemoryFranchiseStore;
pub use record::{BranchRecord, FranchiseRecord, ProductRecord};
pub use store::{FranchiseStore, ScanPage, StoreError};
