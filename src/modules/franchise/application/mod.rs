pub mod hooks;
pub mod use_cases;
