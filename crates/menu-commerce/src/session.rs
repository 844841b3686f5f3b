//! A single browsing session.
//!
//! The session owns the loaded catalog, the current filter criteria and the
//! cart. Front ends hold one `Session` and drive it through these methods
//! instead of touching the cart directly.

use crate::cart::{Cart, CartTotals};
use crate::catalog::{Catalog, MenuItem};
use crate::checkout::{CustomerInfo, Order, OrderProcessor, OrderSummary, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::search::{CategoryFilter, FilterCriteria, FilterResults};
use tracing::debug;

/// Session state from catalog load until the session ends.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    criteria: FilterCriteria,
    cart: Cart,
    processor: OrderProcessor,
}

impl Session {
    /// Start a session over a loaded catalog with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            cart: Cart::new(),
            processor: OrderProcessor::default(),
        }
    }

    pub fn with_processor(mut self, processor: OrderProcessor) -> Self {
        self.processor = processor;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
    }

    pub fn set_available_only(&mut self, available_only: bool) {
        self.criteria.available_only = available_only;
    }

    /// The menu as it should be shown now. Recomputed on every call.
    pub fn visible_items(&self) -> FilterResults<'_> {
        FilterResults::compute(self.catalog.items(), &self.criteria)
    }

    /// Add one unit of a catalog item.
    ///
    /// This is the presentation-side guard: unavailable items are refused
    /// here so they never reach the cart.
    pub fn add_to_cart(&mut self, id: &ItemId) -> Result<i64, CommerceError> {
        let item = self.lookup(id)?;
        if !item.is_available {
            return Err(CommerceError::ItemUnavailable(id.to_string()));
        }
        let item = item.clone();
        Ok(self.cart.add_item(&item))
    }

    /// See [`Cart::set_quantity`].
    pub fn update_quantity(&mut self, id: &ItemId, quantity: i64) -> bool {
        self.cart.set_quantity(id, quantity)
    }

    /// See [`Cart::remove_item`].
    pub fn remove_from_cart(&mut self, id: &ItemId) -> bool {
        self.cart.remove_item(id)
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Snapshot of what checkout would submit right now.
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::from_cart(&self.cart)
    }

    /// Place an order for the current cart. The cart is emptied on success.
    pub async fn checkout(
        &mut self,
        customer: CustomerInfo,
        payment: PaymentMethod,
    ) -> Result<Order, CommerceError> {
        self.processor
            .place_order(&mut self.cart, customer, payment)
            .await
    }

    /// Discard the cart and filters, keeping the catalog.
    pub fn reset(&mut self) {
        self.cart.clear();
        self.criteria = FilterCriteria::default();
        debug!("session reset");
    }

    fn lookup(&self, id: &ItemId) -> Result<&MenuItem, CommerceError> {
        self.catalog
            .get(id)
            .ok_or_else(|| CommerceError::ItemNotFound(id.to_string()))
    }
}
