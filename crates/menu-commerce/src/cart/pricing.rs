//! Cart pricing calculations.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Tax rate applied to the subtotal, in basis points (1000 = 10%).
pub const TAX_RATE_BPS: i64 = 1_000;

/// Label shown next to the tax line.
pub const TAX_LABEL: &str = "Tax (10%)";

/// Pricing breakdown derived from the current cart contents.
///
/// Never stored alongside the cart; recompute with
/// [`Cart::totals`](crate::cart::Cart::totals) after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of price times quantity over all entries.
    pub subtotal: Money,
    /// Subtotal at [`TAX_RATE_BPS`], rounded half-up.
    pub tax: Money,
    /// Subtotal plus tax.
    pub grand_total: Money,
}

impl CartTotals {
    /// Derive tax and grand total from a subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let tax = subtotal.percentage_bps(TAX_RATE_BPS);
        Self {
            subtotal,
            tax,
            grand_total: subtotal + tax,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.grand_total.is_zero()
    }
}
