use super::validation::{customer_ready, is_valid_email};
use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub Uuid);

/// Customer details captured for a single order.
///
/// Customers are not deduplicated: every order gets a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Raw customer input, as typed into the checkout form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl CustomerForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        customer_ready(&self.name, &self.email, &self.address)
    }

    /// Turns the form into a [`Customer`] with a fresh id.
    pub fn validate(self) -> Result<Customer> {
        if !self.is_ready() {
            let reason = if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
                format!("invalid email '{}'", self.email)
            } else {
                "name, email and address are required".to_string()
            };
            return Err(StoreError::InvalidCustomerInfo(reason));
        }

        Ok(Customer {
            id: CustomerId(Uuid::new_v4()),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
        })
    }
}
