use crate::domain::catalog::Catalog;
use crate::domain::ledger::Ledger;
use crate::domain::order::{Order, OrderId};
use crate::domain::ports::{OrderStore, ProductStore};
use crate::domain::product::{Product, ProductId, Quantity};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A thread-safe in-memory product store.
///
/// Uses `Arc<RwLock<Catalog>>` so several sessions can share one catalog.
/// `reserve` holds the write lock across the stock check and the deduction.
#[derive(Default, Clone)]
pub struct InMemoryProductStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryProductStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get(&self, id: ProductId) -> Result<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.get(id).ok().cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.find_by_name(name).cloned())
    }

    async fn all_products(&self) -> Result<Vec<Product>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.products().cloned().collect())
    }

    async fn reserve(&self, id: ProductId, quantity: Quantity) -> Result<Product> {
        let mut catalog = self.catalog.write().await;
        let product = catalog.deduct(id, quantity)?;
        debug!(product = %product.name, remaining = product.stock, "stock reserved");
        Ok(product)
    }
}

/// A thread-safe in-memory order ledger.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    ledger: Arc<RwLock<Ledger>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn append(&self, order: Order) -> Result<()> {
        let mut ledger = self.ledger.write().await;
        ledger.append(order)?;
        debug!(orders = ledger.len(), "order appended");
        Ok(())
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.get(id).cloned())
    }

    async fn mark_paid(&self, id: &OrderId) -> Result<Order> {
        let mut ledger = self.ledger.write().await;
        Ok(ledger.mark_paid(id)?.clone())
    }

    async fn history(&self) -> Result<Vec<Order>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.history().to_vec())
    }
}
