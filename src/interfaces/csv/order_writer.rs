use crate::domain::order::Order;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Flat CSV projection of an order; the customer is reduced to name and email.
#[derive(Debug, Serialize)]
struct OrderRow<'a> {
    order_id: &'a str,
    product: &'a str,
    quantity: u32,
    total: String,
    customer: &'a str,
    email: &'a str,
    paid: bool,
}

impl<'a> From<&'a Order> for OrderRow<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            order_id: order.id.as_str(),
            product: &order.product,
            quantity: order.quantity,
            total: order.total.to_string(),
            customer: &order.customer.name,
            email: &order.customer.email,
            paid: order.is_paid(),
        }
    }
}

/// Writes the order history as CSV.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_orders<'a>(&mut self, orders: impl IntoIterator<Item = &'a Order>) -> Result<()> {
        let mut empty = true;
        for order in orders {
            self.writer.serialize(OrderRow::from(order))?;
            empty = false;
        }
        if empty {
            self.writer.write_record([
                "order_id", "product", "quantity", "total", "customer", "email", "paid",
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
