use super::order::{Order, OrderId};
use crate::error::{Result, StoreError};
use std::collections::HashMap;

/// Append-only order history.
///
/// Orders keep their insertion position forever. The index maps an id to
/// that position so a paid update touches the one stored record.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    orders: Vec<Order>,
    index: HashMap<OrderId, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, order: Order) -> Result<()> {
        if self.index.contains_key(&order.id) {
            return Err(StoreError::DuplicateOrder(order.id.to_string()));
        }
        self.index.insert(order.id.clone(), self.orders.len());
        self.orders.push(order);
        Ok(())
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.index.get(id).map(|&pos| &self.orders[pos])
    }

    /// Flips the stored order to paid and returns the updated record.
    pub fn mark_paid(&mut self, id: &OrderId) -> Result<&Order> {
        let pos = *self
            .index
            .get(id)
            .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))?;
        let order = &mut self.orders[pos];
        order.mark_paid();
        Ok(order)
    }

    /// Orders in the sequence they were placed.
    pub fn history(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
