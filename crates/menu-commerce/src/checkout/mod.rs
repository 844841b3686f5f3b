//! Checkout module.
//!
//! Contains the customer form, payment choice, order summary, and the
//! simulated order processor that resets the cart on success.

mod customer;
mod order;
mod payment;
mod processor;

pub use customer::CustomerInfo;
pub use order::{Order, OrderLine, OrderStatus, OrderSummary};
pub use payment::PaymentMethod;
pub use processor::OrderProcessor;
