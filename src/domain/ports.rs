use super::order::{Order, OrderId};
use super::product::{Product, ProductId, Quantity};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get(&self, id: ProductId) -> Result<Option<Product>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>>;
    async fn all_products(&self) -> Result<Vec<Product>>;
    /// Checks and deducts stock as one step, returning the product afterwards.
    async fn reserve(&self, id: ProductId, quantity: Quantity) -> Result<Product>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn append(&self, order: Order) -> Result<()>;
    async fn get(&self, id: &OrderId) -> Result<Option<Order>>;
    async fn mark_paid(&self, id: &OrderId) -> Result<Order>;
    async fn history(&self) -> Result<Vec<Order>>;
}

pub type ProductStoreBox = Box<dyn ProductStore>;
pub type OrderStoreBox = Box<dyn OrderStore>;
