pub mod entity_name;
pub mod product_stock;

pub use entity_name::EntityName;
pub use product_stock::ProductStock;
