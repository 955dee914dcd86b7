//! Application layer orchestrating the storefront.
//!
//! `Storefront` owns the product and order stores and implements ordering
//! and payment state. `Session` is the per-user context that validates
//! checkout input, tracks the order awaiting payment and dispatches actions.

pub mod session;
pub mod storefront;
