use serde::{Deserialize, Serialize};

use crate::modules::franchise::domain::entities::Product;
use crate::modules::franchise::domain::value_objects::EntityName;
use crate::shared::errors::{AppError, AppResult};

pub const MAX_PRODUCTS: usize = 1000;

/// A branch owns its products exclusively. Products are held in insertion
/// order; callers only ever see a read-only slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    id: String,
    name: EntityName,
    products: Vec<Product>,
}

impl Branch {
    pub fn new(id: String, name: &str) -> AppResult<Self> {
        Ok(Self {
            id,
            name: EntityName::new(name)?,
            products: Vec::new(),
        })
    }

    /// Rehydration constructor used when loading from storage.
    pub fn from_parts(id: String, name: &str, products: Vec<Product>) -> AppResult<Self> {
        Ok(Self {
            id,
            name: EntityName::new(name)?,
            products,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn has_products(&self) -> bool {
        !self.products.is_empty()
    }

    pub fn has_product(&self, product_id: &str) -> bool {
        self.products.iter().any(|p| p.id() == product_id)
    }

    pub fn has_product_named(&self, name: &str) -> bool {
        self.products
            .iter()
            .any(|p| p.name().matches_ignore_case(name))
    }

    pub fn update_name(&mut self, new_name: &str) -> AppResult<()> {
        self.name = EntityName::new(new_name)?;
        Ok(())
    }

    pub fn add_product(&mut self, product: Product) -> AppResult<()> {
        if self.products.len() >= MAX_PRODUCTS {
            return Err(AppError::ValidationError(format!(
                "Branch cannot have more than {} products",
                MAX_PRODUCTS
            )));
        }
        if self.has_product(product.id()) {
            return Err(AppError::DuplicateEntity(format!(
                "Product with id {} already exists in this branch",
                product.id()
            )));
        }
        if self.has_product_named(product.name().as_str()) {
            return Err(AppError::DuplicateEntity(format!(
                "Product with name '{}' already exists in this branch",
                product.name()
            )));
        }
        self.products.push(product);
        Ok(())
    }

    pub fn remove_product(&mut self, product_id: &str) -> AppResult<()> {
        if product_id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Product ID cannot be empty".to_string(),
            ));
        }
        let before = self.products.len();
        self.products.retain(|p| p.id() != product_id);
        if self.products.len() == before {
            return Err(AppError::ProductNotFound(product_id.to_string()));
        }
        Ok(())
    }

    pub fn find_product(&self, product_id: &str) -> AppResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id() == product_id)
            .ok_or_else(|| AppError::ProductNotFound(product_id.to_string()))
    }

    pub fn find_product_mut(&mut self, product_id: &str) -> AppResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id() == product_id)
            .ok_or_else(|| AppError::ProductNotFound(product_id.to_string()))
    }

    /// Renames a product, keeping the case-insensitive name uniqueness
    /// invariant among its siblings.
    pub fn rename_product(&mut self, product_id: &str, new_name: &str) -> AppResult<()> {
        if !self.has_product(product_id) {
            return Err(AppError::ProductNotFound(product_id.to_string()));
        }
        let taken = self
            .products
            .iter()
            .any(|p| p.id() != product_id && p.name().matches_ignore_case(new_name));
        if taken {
            return Err(AppError::DuplicateEntity(format!(
                "Product with name '{}' already exists in this branch",
                new_name.trim()
            )));
        }
        self.find_product_mut(product_id)?.update_name(new_name)
    }

    /// Read view holding only the product with the highest stock, or `None`
    /// for a branch without products.
    pub fn max_stock_view(&self) -> Option<Branch> {
        self.product_with_max_stock().map(|max| Branch {
            id: self.id.clone(),
            name: self.name.clone(),
            products: vec![max.clone()],
        })
    }

    /// The single product holding the highest stock; ties resolve to the
    /// first one encountered.
    pub fn product_with_max_stock(&self) -> Option<&Product> {
        let mut best: Option<&Product> = None;
        for product in &self.products {
            match best {
                Some(current) if product.stock() <= current.stock() => {}
                _ => best = Some(product),
            }
        }
        best
    }
}
