//! Order summary and placed order types.

use crate::cart::{Cart, CartEntry, CartTotals};
use crate::catalog::Category;
use crate::checkout::{CustomerInfo, PaymentMethod};
use crate::ids::{ItemId, OrderId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Submitted, processing not finished.
    #[default]
    Pending,
    /// Processing finished and the cart was reset.
    Confirmed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Processing Order...",
            OrderStatus::Confirmed => "Order Placed Successfully!",
        }
    }
}

/// One row of an order summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    pub category: Category,
    pub unit_price: Money,
    pub quantity: i64,
    /// Unit price times quantity.
    pub line_total: Money,
}

impl From<&CartEntry> for OrderLine {
    fn from(entry: &CartEntry) -> Self {
        Self {
            item_id: entry.item.id.clone(),
            name: entry.item.name.clone(),
            category: entry.item.category,
            unit_price: entry.item.price,
            quantity: entry.quantity,
            line_total: entry.line_total(),
        }
    }
}

/// Cart contents and totals frozen at the moment checkout starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub item_count: i64,
    pub totals: CartTotals,
}

impl OrderSummary {
    /// Snapshot the cart. Later cart changes do not affect the summary.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart.entries().iter().map(OrderLine::from).collect(),
            item_count: cart.item_count(),
            totals: cart.totals(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub summary: OrderSummary,
    pub customer: CustomerInfo,
    pub payment: PaymentMethod,
    pub status: OrderStatus,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    pub(crate) fn new(summary: OrderSummary, customer: CustomerInfo, payment: PaymentMethod) -> Self {
        Self {
            id: OrderId::generate(),
            summary,
            customer,
            payment,
            status: OrderStatus::Pending,
            placed_at: current_timestamp(),
        }
    }

    /// The amount presented for payment.
    pub fn grand_total(&self) -> Money {
        self.summary.totals.grand_total
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == OrderStatus::Confirmed
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
