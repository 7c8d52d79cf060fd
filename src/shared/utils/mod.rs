pub mod cursor;
pub mod logger;
