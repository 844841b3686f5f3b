//! Menu ordering domain logic.
//!
//! This crate is the logic behind a food-ordering storefront:
//!
//! - **Catalog**: menu items, categories, validated loading (simulated backend)
//! - **Search**: the search × category × availability filter
//! - **Cart**: quantity merging and subtotal/tax/grand-total derivation
//! - **Checkout**: customer form, payment choice, simulated order placement
//! - **Session**: one owner for catalog, filter criteria and cart
//!
//! All amounts are whole Indonesian Rupiah.
//!
//! # Example
//!
//! ```rust
//! use menu_commerce::prelude::*;
//!
//! let catalog = Catalog::sample();
//! let mut cart = Cart::new();
//!
//! let visible = filter_items(catalog.items(), &FilterCriteria::new().with_search("beef"));
//! cart.add_item(visible[0]);
//! cart.add_item(catalog.get(&ItemId::new("i-3")).unwrap());
//!
//! let totals = cart.totals();
//! assert_eq!(totals.grand_total.display(), "Rp113.300");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use session::Session;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::session::Session;

    // Catalog
    pub use crate::catalog::{
        load_catalog, Catalog, CatalogSource, Category, FileSource, MenuItem, SimulatedLoader,
        StaticSource,
    };

    // Search
    pub use crate::search::{filter_items, CategoryFilter, FilterCriteria, FilterResults};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartTotals, TAX_RATE_BPS};

    // Checkout
    pub use crate::checkout::{
        CustomerInfo, Order, OrderLine, OrderProcessor, OrderStatus, OrderSummary, PaymentMethod,
    };
}
