pub mod branch;
pub mod franchise;
pub mod product;

pub use branch::Branch;
pub use franchise::Franchise;
pub use product::Product;
