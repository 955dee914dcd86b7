use super::storefront::Storefront;
use crate::domain::customer::CustomerForm;
use crate::domain::order::{Order, OrderId};
use crate::domain::payment::PaymentMethods;
use crate::domain::product::Quantity;
use crate::error::{Result, StoreError};
use tracing::{debug, info};

/// Largest quantity the checkout form accepts.
pub const DEFAULT_MAX_QUANTITY: u32 = 20;

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub max_quantity: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

/// A user interaction, as submitted from the storefront page.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PlaceOrder {
        product: String,
        quantity: u32,
        form: CustomerForm,
    },
    Pay {
        method: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub message: String,
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    OrderPlaced(Order),
    PaymentConfirmed(Receipt),
}

/// One user's stay on the storefront.
///
/// Created when the user arrives and dropped when they leave. Holds the
/// id of the order awaiting payment; the order itself lives in the ledger.
pub struct Session<'a> {
    storefront: &'a Storefront,
    payments: PaymentMethods,
    config: SessionConfig,
    current_order: Option<OrderId>,
}

impl<'a> Session<'a> {
    pub fn new(storefront: &'a Storefront, config: SessionConfig) -> Self {
        Self::with_payments(storefront, config, PaymentMethods::default())
    }

    pub fn with_payments(
        storefront: &'a Storefront,
        config: SessionConfig,
        payments: PaymentMethods,
    ) -> Self {
        Self {
            storefront,
            payments,
            config,
            current_order: None,
        }
    }

    pub fn current_order(&self) -> Option<&OrderId> {
        self.current_order.as_ref()
    }

    pub async fn apply(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::PlaceOrder {
                product,
                quantity,
                form,
            } => self
                .submit_order(&product, quantity, form)
                .await
                .map(Outcome::OrderPlaced),
            Action::Pay { method } => self.pay(&method).await.map(Outcome::PaymentConfirmed),
        }
    }

    /// Validates the checkout form and places the order.
    pub async fn submit_order(
        &mut self,
        product: &str,
        quantity: u32,
        form: CustomerForm,
    ) -> Result<Order> {
        if quantity > self.config.max_quantity {
            return Err(StoreError::ValidationError(format!(
                "Quantity must be between 1 and {}",
                self.config.max_quantity
            )));
        }
        let quantity = Quantity::new(quantity)?;
        let customer = form.validate()?;
        let product = self.storefront.find_product(product).await?;

        match self
            .storefront
            .place_order(product.id, quantity, customer)
            .await
        {
            Ok(order) => {
                self.current_order = Some(order.id.clone());
                Ok(order)
            }
            Err(e @ StoreError::OutOfStock { .. }) => {
                self.current_order = None;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Confirms payment for the current order.
    pub async fn pay(&mut self, method: &str) -> Result<Receipt> {
        let order_id = self
            .current_order
            .clone()
            .ok_or(StoreError::NoActiveOrder)?;
        let method = self.payments.resolve(method)?;
        debug!(order_id = %order_id, method = method.label(), "processing payment");

        let message = method.process_payment();
        let order = self.storefront.mark_paid(&order_id).await?;
        info!(order_id = %order_id, method = method.label(), "payment confirmed");

        Ok(Receipt { message, order })
    }
}
