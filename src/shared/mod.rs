// Shared kernel used across bounded contexts

pub mod application;
pub mod errors;
pub mod utils;
