use crate::error::{Result, StoreError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative unit price.
///
/// Wraps `rust_decimal::Decimal` so that totals are computed without
/// floating point drift.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(pub(crate) Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(StoreError::ValidationError(
                "Price must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Line total: quantity × unit price. Fails instead of overflowing.
    pub fn checked_mul(self, quantity: Quantity) -> Result<Price> {
        self.0
            .checked_mul(Decimal::from(quantity.value()))
            .map(Self)
            .ok_or_else(|| {
                StoreError::ValidationError(format!(
                    "Total for {} units at {} is out of range",
                    quantity.value(),
                    self.0
                ))
            })
    }
}

impl TryFrom<Decimal> for Price {
    type Error = StoreError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A requested number of units. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(StoreError::ValidationError(
                "Quantity must be at least 1".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = StoreError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable item and its remaining stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub stock: u32,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        stock: u32,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }

    pub fn is_in_stock(&self, quantity: Quantity) -> bool {
        self.stock >= quantity.value()
    }

    /// Removes `quantity` units from stock if enough are available.
    ///
    /// On shortage the stock is left untouched and `OutOfStock` reports
    /// what is still available.
    pub fn deduct(&mut self, quantity: Quantity) -> Result<()> {
        if self.is_in_stock(quantity) {
            self.stock -= quantity.value();
            Ok(())
        } else {
            Err(StoreError::OutOfStock {
                product: self.name.clone(),
                requested: quantity.value(),
                available: self.stock,
            })
        }
    }
}
