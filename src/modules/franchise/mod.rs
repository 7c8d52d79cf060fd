pub mod application;
pub mod domain;
pub mod infrastructure;

pub use domain::entities::{Branch, Franchise, Product};
pub use domain::repositories::{FranchiseCache, FranchiseRepository};
