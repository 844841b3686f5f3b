//! Shopping cart module.
//!
//! Contains the cart engine and its derived totals.

mod cart;
mod pricing;

pub use cart::{Cart, CartEntry};
pub use pricing::{CartTotals, TAX_LABEL, TAX_RATE_BPS};
