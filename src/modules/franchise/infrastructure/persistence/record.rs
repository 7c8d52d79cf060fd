use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::franchise::domain::entities::{Branch, Franchise, Product};
use crate::shared::errors::AppResult;

/// Storage-shaped mapping of the aggregate. Records are plain data; mapping
/// back to the domain goes through the validating constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseRecord {
    pub id: String,
    pub name: String,
    pub branches: Vec<BranchRecord>,
    pub version: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRecord {
    pub id: String,
    pub name: String,
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub stock: u32,
}

impl FranchiseRecord {
    pub fn from_domain(franchise: &Franchise) -> Self {
        Self {
            id: franchise.id().to_string(),
            name: franchise.name().as_str().to_string(),
            branches: franchise.branches().iter().map(BranchRecord::from_domain).collect(),
            version: franchise.version(),
            updated_at: Utc::now(),
        }
    }

    pub fn to_domain(&self) -> AppResult<Franchise> {
        let branches = self
            .branches
            .iter()
            .map(BranchRecord::to_domain)
            .collect::<AppResult<Vec<Branch>>>()?;
        Franchise::from_parts(self.id.clone(), &self.name, branches, self.version)
    }
}

impl BranchRecord {
    fn from_domain(branch: &Branch) -> Self {
        Self {
            id: branch.id().to_string(),
            name: branch.name().as_str().to_string(),
            products: branch.products().iter().map(ProductRecord::from_domain).collect(),
        }
    }

    fn to_domain(&self) -> AppResult<Branch> {
        let products = self
            .products
            .iter()
            .map(ProductRecord::to_domain)
            .collect::<AppResult<Vec<Product>>>()?;
        Branch::from_parts(self.id.clone(), &self.name, products)
    }
}

impl ProductRecord {
    fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().as_str().to_string(),
            stock: product.stock().value(),
        }
    }

    fn to_domain(&self) -> AppResult<Product> {
        Product::new(self.id.clone(), &self.name, self.stock)
    }
}
