use super::customer::Customer;
use super::product::{Price, ProductId, Quantity};
use crate::error::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Short order identifier: the first 8 hex digits of a random UUID v4.
///
/// Practically unique, not guaranteed: the ledger rejects collisions and the
/// storefront regenerates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub const LEN: usize = 8;

    pub fn generate() -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(Self::LEN);
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Placed → Paid. There is no way back.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(from = "bool")]
pub enum OrderStatus {
    #[default]
    Placed,
    Paid,
}

impl From<bool> for OrderStatus {
    fn from(paid: bool) -> Self {
        if paid {
            OrderStatus::Paid
        } else {
            OrderStatus::Placed
        }
    }
}

impl Serialize for OrderStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(*self == OrderStatus::Paid)
    }
}

/// A single purchase, as recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub product: String,
    pub quantity: u32,
    pub total: Price,
    pub customer: Customer,
    #[serde(rename = "paid")]
    pub status: OrderStatus,
}

impl Order {
    /// Builds a placed order. Fails if the total does not fit a `Decimal`.
    pub fn new(
        id: OrderId,
        product_id: ProductId,
        product: impl Into<String>,
        unit_price: Price,
        quantity: Quantity,
        customer: Customer,
    ) -> Result<Self> {
        Ok(Self {
            id,
            product_id,
            product: product.into(),
            quantity: quantity.value(),
            total: unit_price.checked_mul(quantity)?,
            customer,
            status: OrderStatus::Placed,
        })
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Marks the order paid. Calling it again changes nothing.
    pub fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }
}
