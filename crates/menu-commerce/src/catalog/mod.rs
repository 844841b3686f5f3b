//! Menu catalog module.
//!
//! Contains the menu item model, the validated read-only catalog, and the
//! sources a catalog can be loaded from.

mod item;
mod loader;
mod menu;

pub use item::{Category, MenuItem};
pub use loader::{
    load_catalog, CatalogSource, FileSource, SimulatedLoader, StaticSource, LOAD_FAILURE_MESSAGE,
};
pub use menu::Catalog;
