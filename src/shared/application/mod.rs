/// Shared application layer patterns
///
/// Application-level abstractions used across bounded contexts.
pub mod pagination;

pub use pagination::*;
