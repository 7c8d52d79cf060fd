pub mod modules;
pub mod shared;

pub use modules::franchise;
pub use shared::errors::{AppError, AppResult};
