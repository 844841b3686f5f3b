//! Cart and cart entry types.

use crate::cart::CartTotals;
use crate::catalog::MenuItem;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A shopping cart for one session.
///
/// Entries keep insertion order and there is at most one entry per item id.
/// Every entry has a quantity of at least one. None of the mutators can
/// fail; unknown ids are ignored.
///
/// Serialized as the bare entry list. Deserializing goes through
/// [`Cart::from_entries`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from stored entries.
    ///
    /// Entries sharing an id are merged into the first one, keeping its
    /// snapshot. Any entry with a quantity below one is rejected.
    pub fn from_entries(entries: Vec<CartEntry>) -> Result<Self, CommerceError> {
        let mut cart = Self::new();
        for entry in entries {
            if entry.quantity < 1 {
                return Err(CommerceError::InvalidQuantity(format!(
                    "{} has quantity {}",
                    entry.item.id, entry.quantity
                )));
            }
            match cart.entry_mut(&entry.item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(entry.quantity);
                }
                None => cart.entries.push(entry),
            }
        }
        Ok(cart)
    }

    /// Add one unit of `item`.
    ///
    /// An existing entry is incremented and keeps the item snapshot taken
    /// when it was first added. Otherwise a new entry with quantity 1 is
    /// appended.
    ///
    /// Availability is not checked here: callers must not offer unavailable
    /// items for adding. Such calls are logged and still applied.
    ///
    /// Returns the entry's quantity after the add.
    pub fn add_item(&mut self, item: &MenuItem) -> i64 {
        if !item.is_available {
            warn!(item_id = %item.id, "unavailable item added to cart");
        }

        if let Some(entry) = self.entry_mut(&item.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            debug!(item_id = %item.id, quantity = entry.quantity, "cart quantity incremented");
            return entry.quantity;
        }

        self.entries.push(CartEntry::new(item.clone()));
        debug!(item_id = %item.id, "cart entry added");
        1
    }

    /// Replace an entry's quantity.
    ///
    /// A quantity of zero or less removes the entry. Setting a positive
    /// quantity for an id that is not in the cart does nothing.
    ///
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        match self.entry_mut(id) {
            Some(entry) => {
                let changed = entry.quantity != quantity;
                entry.quantity = quantity;
                debug!(item_id = %id, quantity, "cart quantity set");
                changed
            }
            None => {
                debug!(item_id = %id, quantity, "set quantity on absent item ignored");
                false
            }
        }
    }

    /// Remove an entry. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.item.id != id);
        let removed = self.entries.len() < len_before;
        if removed {
            debug!(item_id = %id, "cart entry removed");
        }
        removed
    }

    /// Empty the cart. Used once an order has been placed.
    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("cart cleared");
    }

    /// Subtotal, tax and grand total for the current contents.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_subtotal(self.subtotal())
    }

    /// Sum of price times quantity.
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Total number of units across entries, for badges.
    pub fn item_count(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, e| acc.saturating_add(e.quantity))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Owned copy of the entries, e.g. for an order summary.
    pub fn snapshot(&self) -> Vec<CartEntry> {
        self.entries.clone()
    }

    pub fn get(&self, id: &ItemId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: &ItemId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| &e.item.id == id)
    }
}

impl TryFrom<Vec<CartEntry>> for Cart {
    type Error = CommerceError;

    fn try_from(entries: Vec<CartEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

/// A menu item in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Snapshot of the item when it was first added.
    #[serde(flatten)]
    pub item: MenuItem,
    /// Always at least 1.
    pub quantity: i64,
}

impl CartEntry {
    fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.item.price * self.quantity
    }
}
