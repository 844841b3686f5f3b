//! Commerce error types.

use thiserror::Error;

/// Errors that can occur outside the total core operations.
///
/// Filtering and cart mutation never fail. These errors come from the
/// boundaries: validating catalog data, loading it, parsing user input,
/// and checkout.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A catalog entry failed shape validation.
    #[error("Invalid menu item {id:?}: {reason}")]
    InvalidMenuItem { id: String, reason: String },

    /// Two catalog entries share an id.
    #[error("Duplicate menu item id: {0}")]
    DuplicateItemId(String),

    /// Item not found in the catalog.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// Item exists but cannot be ordered right now.
    #[error("Menu item is unavailable: {0}")]
    ItemUnavailable(String),

    /// Catalog could not be loaded. The message is shown to the user verbatim.
    #[error("{0}")]
    CatalogLoad(String),

    /// Unknown category name.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Unknown payment method.
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    /// Stored cart entry with a quantity below one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Required customer fields are missing.
    #[error("Checkout incomplete: missing {}", .0.join(", "))]
    CheckoutIncomplete(Vec<&'static str>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error while reading catalog data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
