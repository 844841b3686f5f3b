//! Catalog filter criteria and the filtering pipeline.

use crate::catalog::{Category, MenuItem};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Category selection: every category, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three predicates that decide catalog visibility.
///
/// `Default` is the identity filter: empty search, all categories,
/// unavailable items included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against item names.
    pub search_term: String,
    pub category: CategoryFilter,
    /// Drop unavailable items entirely when set.
    pub available_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn available_only(mut self, available_only: bool) -> Self {
        self.available_only = available_only;
        self
    }

    /// True when every item passes.
    pub fn is_identity(&self) -> bool {
        self.search_term.is_empty() && self.category == CategoryFilter::All && !self.available_only
    }

    /// Check an item against all three predicates.
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.matches_with_needle(&self.search_term.to_lowercase(), item)
    }

    /// `matches` with the search term already lowercased, so a whole list
    /// is filtered with one lowercase of the term.
    fn matches_with_needle(&self, needle: &str, item: &MenuItem) -> bool {
        (needle.is_empty() || item.name.to_lowercase().contains(needle))
            && self.category.matches(item.category)
            && (!self.available_only || item.is_available)
    }
}

/// Return the items that satisfy `criteria`, in their original order.
///
/// Pure and idempotent. An empty result is a normal outcome.
pub fn filter_items<'a>(items: &'a [MenuItem], criteria: &FilterCriteria) -> Vec<&'a MenuItem> {
    let needle = criteria.search_term.to_lowercase();
    let visible: Vec<&MenuItem> = items
        .iter()
        .filter(|item| criteria.matches_with_needle(&needle, item))
        .collect();

    trace!(
        total = items.len(),
        visible = visible.len(),
        search = %criteria.search_term,
        category = %criteria.category,
        available_only = criteria.available_only,
        "catalog filter recomputed"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(items: &[&MenuItem]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_identity_filter_returns_everything() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_identity());
        let visible = filter_items(catalog.items(), &criteria);
        assert_eq!(visible.len(), catalog.len());
        assert!(visible.iter().zip(catalog.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::sample();
        let visible = filter_items(catalog.items(), &FilterCriteria::new().with_search("beef"));
        assert_eq!(names(&visible), vec!["Beef Bulgogi Rice"]);

        let visible = filter_items(catalog.items(), &FilterCriteria::new().with_search("BOWL"));
        assert_eq!(names(&visible), vec!["Chicken Teriyaki Bowl"]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::sample();
        let visible = filter_items(
            catalog.items(),
            &FilterCriteria::new().with_category(Category::Main),
        );
        assert_eq!(
            names(&visible),
            vec!["Beef Bulgogi Rice", "Chicken Teriyaki Bowl"]
        );
    }

    #[test]
    fn test_available_only_drops_unavailable() {
        let catalog = Catalog::sample();
        let visible = filter_items(catalog.items(), &FilterCriteria::new().available_only(true));
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|i| i.name != "Green Tea"));
    }

    #[test]
    fn test_unavailable_items_shown_when_toggle_off() {
        let catalog = Catalog::sample();
        let visible = filter_items(
            catalog.items(),
            &FilterCriteria::new().with_category(Category::Beverage),
        );
        assert_eq!(names(&visible), vec!["Green Tea"]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::new()
            .with_search("tea")
            .with_category(Category::Beverage)
            .available_only(true);
        assert!(filter_items(catalog.items(), &criteria).is_empty());

        let criteria = FilterCriteria::new().with_search("tea");
        assert_eq!(names(&filter_items(catalog.items(), &criteria)), vec!["Green Tea"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = Catalog::sample();
        let visible = filter_items(catalog.items(), &FilterCriteria::new().with_search("pizza"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_matches_agrees_with_filter() {
        let catalog = Catalog::sample();
        let categories = [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Main),
            CategoryFilter::Only(Category::Beverage),
        ];
        for search in ["", "o", "TEA", "Bulgogi", "zzz"] {
            for category in categories {
                for available_only in [false, true] {
                    let criteria = FilterCriteria::new()
                        .with_search(search)
                        .with_category(category)
                        .available_only(available_only);
                    let visible = filter_items(catalog.items(), &criteria);
                    let expected: Vec<&MenuItem> =
                        catalog.iter().filter(|i| criteria.matches(i)).collect();
                    assert_eq!(visible, expected, "criteria {:?}", criteria);
                }
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::sample();
        let criteria = FilterCriteria::new().with_search("i");
        assert_eq!(
            filter_items(catalog.items(), &criteria),
            filter_items(catalog.items(), &criteria)
        );
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "side".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Side)
        );
        assert!("Snacks".parse::<CategoryFilter>().is_err());
    }
}
