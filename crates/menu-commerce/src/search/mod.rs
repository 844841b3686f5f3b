//! Search module.
//!
//! Derives the visible menu from the catalog and the current filter
//! criteria.

mod filter;
mod results;

pub use filter::{filter_items, CategoryFilter, FilterCriteria};
pub use results::FilterResults;
