use serde::{Deserialize, Serialize};

use crate::modules::franchise::domain::value_objects::{EntityName, ProductStock};
use crate::shared::errors::AppResult;

/// Leaf entity of the aggregate. The id is assigned at creation and never
/// changes; name and stock mutate only through validated operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: String,
    name: EntityName,
    stock: ProductStock,
}

impl Product {
    pub fn new(id: String, name: &str, stock: u32) -> AppResult<Self> {
        Ok(Self {
            id,
            name: EntityName::new(name)?,
            stock: ProductStock::new(stock)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }

    pub fn stock(&self) -> ProductStock {
        self.stock
    }

    pub fn update_name(&mut self, new_name: &str) -> AppResult<()> {
        self.name = EntityName::new(new_name)?;
        Ok(())
    }

    pub fn update_stock(&mut self, new_stock: u32) -> AppResult<()> {
        self.stock = ProductStock::new(new_stock)?;
        Ok(())
    }

    pub fn increment_stock(&mut self, quantity: u32) -> AppResult<()> {
        self.stock = self.stock.increment(quantity)?;
        Ok(())
    }

    pub fn decrement_stock(&mut self, quantity: u32) -> AppResult<()> {
        self.stock = self.stock.decrement(quantity)?;
        Ok(())
    }

    pub fn has_stock(&self) -> bool {
        self.stock.has_stock()
    }
}
