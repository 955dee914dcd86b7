//! Domain types for the storefront: products and their catalog, customers,
//! orders and the ledger that records them, and simulated payment methods.

pub mod catalog;
pub mod customer;
pub mod ledger;
pub mod order;
pub mod payment;
pub mod ports;
pub mod product;
pub mod validation;
