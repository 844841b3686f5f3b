//! Filtered menu results.

use crate::catalog::MenuItem;
use crate::search::{filter_items, FilterCriteria};
use serde::Serialize;

/// The visible slice of the catalog for one set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResults<'a> {
    /// Matching items in catalog order.
    pub items: Vec<&'a MenuItem>,
    /// Size of the catalog the results were drawn from.
    pub total: usize,
}

impl<'a> FilterResults<'a> {
    /// Run the filter over `items`.
    pub fn compute(items: &'a [MenuItem], criteria: &FilterCriteria) -> Self {
        Self {
            items: filter_items(items, criteria),
            total: items.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Callers render a "no results" state for this; it is not an error.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of catalog items hidden by the criteria.
    pub fn hidden(&self) -> usize {
        self.total - self.items.len()
    }

    /// Announcement for screen readers and status lines.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "No menu items found matching your criteria".to_string()
        } else {
            format!("Showing {} menu items", self.items.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_summary_with_results() {
        let catalog = Catalog::sample();
        let results =
            FilterResults::compute(catalog.items(), &FilterCriteria::new().available_only(true));
        assert_eq!(results.summary(), "Showing 4 menu items");
        assert_eq!(results.hidden(), 1);
    }

    #[test]
    fn test_summary_without_results() {
        let catalog = Catalog::sample();
        let results =
            FilterResults::compute(catalog.items(), &FilterCriteria::new().with_search("ramen"));
        assert!(results.is_empty());
        assert_eq!(
            results.summary(),
            "No menu items found matching your criteria"
        );
    }
}
