use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::AppError;

pub const MAX_STOCK: u32 = 1_000_000;

/// Stock level of a product, bounded to 0..=1_000_000.
///
/// Arithmetic returns a new value and never leaves the bounds; the original
/// is untouched on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProductStock {
    value: u32,
}

impl ProductStock {
    pub fn new(value: u32) -> Result<Self, AppError> {
        if value > MAX_STOCK {
            return Err(AppError::ValidationError(format!(
                "Stock cannot exceed maximum limit of {}. Provided: {}",
                MAX_STOCK, value
            )));
        }
        Ok(Self { value })
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&self, quantity: u32) -> Result<Self, AppError> {
        if quantity == 0 {
            return Err(AppError::ValidationError(
                "Quantity to increment must be positive".to_string(),
            ));
        }
        let new_value = self.value as u64 + quantity as u64;
        if new_value > MAX_STOCK as u64 {
            return Err(AppError::ValidationError(format!(
                "Stock cannot exceed maximum limit of {}. Current: {}, Increment: {}",
                MAX_STOCK, self.value, quantity
            )));
        }
        Ok(Self {
            value: new_value as u32,
        })
    }

    pub fn decrement(&self, quantity: u32) -> Result<Self, AppError> {
        if quantity == 0 {
            return Err(AppError::ValidationError(
                "Quantity to decrement must be positive".to_string(),
            ));
        }
        if quantity > self.value {
            return Err(AppError::ValidationError(format!(
                "Insufficient stock. Available: {}, Requested: {}",
                self.value, quantity
            )));
        }
        Ok(Self {
            value: self.value - quantity,
        })
    }

    pub fn has_stock(&self) -> bool {
        self.value > 0
    }

    pub fn can_fulfill(&self, requested: u32) -> bool {
        self.value >= requested
    }
}

impl fmt::Display for ProductStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<u32> for ProductStock {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ProductStock::new(value)
    }
}

impl From<ProductStock> for u32 {
    fn from(stock: ProductStock) -> Self {
        stock.value
    }
}
