//! Menu item and category types.

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Main,
    Side,
    Beverage,
    Dessert,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 4] = [
        Category::Main,
        Category::Side,
        Category::Beverage,
        Category::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "Main",
            Category::Side => "Side",
            Category::Beverage => "Beverage",
            Category::Dessert => "Dessert",
        }
    }

    /// Label for category pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Main => "Main Dishes",
            Category::Side => "Side Dishes",
            Category::Beverage => "Beverages",
            Category::Dessert => "Desserts",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An orderable entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Stable identifier, unique within the catalog.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    pub category: Category,
    /// Price in whole rupiah.
    pub price: Money,
    /// Unavailable items are listed but must not be added to a cart.
    pub is_available: bool,
}

impl MenuItem {
    /// Create a new available menu item.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: Category,
        price: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price: Money::new(price),
            is_available: true,
        }
    }

    /// Set availability.
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Check the shape invariants a loader must uphold.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidMenuItem {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.id.as_str().trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.price.is_negative() {
            return Err(invalid("price must not be negative"));
        }
        Ok(())
    }
}
