//! Simulated order submission.

use crate::cart::Cart;
use crate::checkout::{CustomerInfo, Order, OrderStatus, OrderSummary, PaymentMethod};
use crate::error::CommerceError;
use std::time::Duration;
use tracing::info;

/// Places orders after a fixed processing delay.
///
/// There is no payment gateway. Submission validates the form, waits, and
/// confirms; the cart is reset only when the order is confirmed.
#[derive(Debug, Clone)]
pub struct OrderProcessor {
    processing_delay: Duration,
}

impl Default for OrderProcessor {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

impl OrderProcessor {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    /// Processor with no delay.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Check that an order could be placed without placing it.
    pub fn validate(&self, cart: &Cart, customer: &CustomerInfo) -> Result<(), CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let missing = customer.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing));
        }
        Ok(())
    }

    /// Submit the cart as an order.
    ///
    /// On error the cart is left untouched. On success it is emptied and
    /// the confirmed order carries the snapshot taken before the delay.
    pub async fn place_order(
        &self,
        cart: &mut Cart,
        customer: CustomerInfo,
        payment: PaymentMethod,
    ) -> Result<Order, CommerceError> {
        self.validate(cart, &customer)?;

        let mut order = Order::new(OrderSummary::from_cart(cart), customer, payment);
        info!(
            order_id = %order.id,
            items = order.summary.item_count,
            grand_total = order.grand_total().amount(),
            payment = %payment,
            "processing order"
        );

        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        order.status = OrderStatus::Confirmed;
        cart.clear();
        info!(order_id = %order.id, "order confirmed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MenuItem};

    fn customer() -> CustomerInfo {
        CustomerInfo::new("Budi", "budi@example.com", "081234567890", "Jl. Sudirman 5")
    }

    fn cart_with_bulgogi() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&MenuItem::new("i-1", "Beef Bulgogi Rice", Category::Main, 85_000));
        cart
    }

    #[tokio::test]
    async fn test_place_order_resets_cart() {
        let mut cart = cart_with_bulgogi();
        let order = OrderProcessor::immediate()
            .place_order(&mut cart, customer(), PaymentMethod::CashOnDelivery)
            .await
            .unwrap();

        assert!(order.is_confirmed());
        assert_eq!(order.grand_total().amount(), 93_500);
        assert_eq!(order.payment, PaymentMethod::CashOnDelivery);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let mut cart = Cart::new();
        let result = OrderProcessor::immediate()
            .place_order(&mut cart, customer(), PaymentMethod::default())
            .await;
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
    }

    #[tokio::test]
    async fn test_incomplete_customer_keeps_cart() {
        let mut cart = cart_with_bulgogi();
        let mut info = customer();
        info.email.clear();
        let result = OrderProcessor::immediate()
            .place_order(&mut cart, info, PaymentMethod::default())
            .await;

        match result {
            Err(CommerceError::CheckoutIncomplete(fields)) => assert_eq!(fields, vec!["email"]),
            other => panic!("expected incomplete checkout, got {:?}", other),
        }
        assert_eq!(cart.item_count(), 1);
    }
}
