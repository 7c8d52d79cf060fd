pub mod franchise;
