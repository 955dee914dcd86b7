use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderId};
use crate::domain::ports::{OrderStoreBox, ProductStoreBox};
use crate::domain::product::{Price, Product, ProductId, Quantity};
use crate::error::{Result, StoreError};
use tracing::{info, warn};

/// Attempts at appending under a freshly drawn order id before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

/// The storefront core: catalog queries, order placement and payment state.
///
/// `Storefront` owns the storage backends. It holds no per-user state, so
/// it can be shared by any number of [`Session`](super::session::Session)s.
pub struct Storefront {
    products: ProductStoreBox,
    orders: OrderStoreBox,
}

impl Storefront {
    /// Creates a new `Storefront` instance.
    ///
    /// # Arguments
    ///
    /// * `products` - The store holding the catalog and its stock.
    /// * `orders` - The store holding the order ledger.
    pub fn new(products: ProductStoreBox, orders: OrderStoreBox) -> Self {
        Self { products, orders }
    }

    pub async fn catalog(&self) -> Result<Vec<Product>> {
        self.products.all_products().await
    }

    pub async fn product(&self, id: ProductId) -> Result<Product> {
        self.products
            .get(id)
            .await?
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))
    }

    pub async fn find_product(&self, name: &str) -> Result<Product> {
        self.products
            .find_by_name(name)
            .await?
            .ok_or_else(|| StoreError::ProductNotFound(name.trim().to_string()))
    }

    pub async fn is_in_stock(&self, id: ProductId, quantity: Quantity) -> Result<bool> {
        Ok(self.product(id).await?.is_in_stock(quantity))
    }

    pub async fn price(&self, id: ProductId) -> Result<Price> {
        Ok(self.product(id).await?.price)
    }

    pub async fn stock(&self, id: ProductId) -> Result<u32> {
        Ok(self.product(id).await?.stock)
    }

    /// Places an order, deducting stock at placement time.
    ///
    /// The order, total included, is built before any stock is taken, so a
    /// rejected order leaves the catalog and the ledger untouched and the
    /// call can simply be retried.
    pub async fn place_order(
        &self,
        product_id: ProductId,
        quantity: Quantity,
        customer: Customer,
    ) -> Result<Order> {
        let product = self.product(product_id).await?;
        let mut order = Order::new(
            OrderId::generate(),
            product.id,
            product.name,
            product.price,
            quantity,
            customer,
        )?;

        if let Err(e) = self.products.reserve(product_id, quantity).await {
            if let StoreError::OutOfStock { available, .. } = &e {
                warn!(
                    product = %product_id,
                    requested = quantity.value(),
                    available,
                    "order rejected"
                );
            }
            return Err(e);
        }

        // Stock is already taken here: a colliding id is redrawn, never dropped.
        let mut attempts = 1;
        loop {
            match self.orders.append(order.clone()).await {
                Ok(()) => break,
                Err(StoreError::DuplicateOrder(id)) if attempts < MAX_ID_ATTEMPTS => {
                    warn!(order_id = %id, "order id collision, regenerating");
                    order.id = OrderId::generate();
                    attempts += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            order_id = %order.id,
            product = %order.product,
            quantity = order.quantity,
            total = %order.total,
            "order placed"
        );
        Ok(order)
    }

    /// Marks an order paid. Paying twice leaves it paid.
    pub async fn mark_paid(&self, id: &OrderId) -> Result<Order> {
        let order = self.orders.mark_paid(id).await?;
        info!(order_id = %id, "order paid");
        Ok(order)
    }

    pub async fn order(&self, id: &OrderId) -> Result<Order> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))
    }

    /// Every order ever placed, oldest first.
    pub async fn history(&self) -> Result<Vec<Order>> {
        self.orders.history().await
    }
}
