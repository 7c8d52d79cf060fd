use std::time::Duration;

pub mod add_branch;
pub mod add_product;
pub mod create_franchise;
pub mod delete_franchise;
pub mod get_franchise;
pub mod get_max_stock_products;
pub mod list_franchises;
pub mod remove_branch;
pub mod remove_product;
pub mod update_branch_name;
pub mod update_franchise_name;
pub mod update_product_name;
pub mod update_product_stock;

pub use add_branch::AddBranchUseCase;
pub use add_product::AddProductUseCase;
pub use create_franchise::CreateFranchiseUseCase;
pub use delete_franchise::DeleteFranchiseUseCase;
pub use get_franchise::GetFranchiseUseCase;
pub use get_max_stock_products::GetMaxStockProductsUseCase;
pub use list_franchises::ListFranchisesUseCase;
pub use remove_branch::RemoveBranchUseCase;
pub use remove_product::RemoveProductUseCase;
pub use update_branch_name::UpdateBranchNameUseCase;
pub use update_franchise_name::UpdateFranchiseNameUseCase;
pub use update_product_name::UpdateProductNameUseCase;
pub use update_product_stock::{StockUpdate, UpdateProductStockUseCase};

/// TTL for every cached aggregate entry.
pub const CACHE_TTL: Duration = Duration::from_secs(30 * 60);
