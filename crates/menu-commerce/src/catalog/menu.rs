//! The validated, read-only catalog.

use crate::catalog::{Category, MenuItem};
use crate::error::CommerceError;
use crate::ids::ItemId;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// The full menu for a session.
///
/// Built once from loader output and never mutated afterwards. Every item
/// has passed [`MenuItem::validate`] and ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Validate items and build a catalog, keeping their order.
    ///
    /// Fails on the first malformed item or repeated id.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CommerceError> {
        validate_items(&items)?;
        Ok(Self { items })
    }

    /// The house menu.
    pub fn sample() -> Self {
        Self {
            items: sample_items(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items per category, including categories with none.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        for item in &self.items {
            *counts.entry(item.category).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn validate_items(items: &[MenuItem]) -> Result<(), CommerceError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(CommerceError::DuplicateItemId(item.id.to_string()));
        }
    }
    Ok(())
}

/// Items served by the built-in menu.
pub(crate) fn sample_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("i-1", "Beef Bulgogi Rice", Category::Main, 85_000),
        MenuItem::new("i-2", "Chicken Teriyaki Bowl", Category::Main, 78_000),
        MenuItem::new("i-3", "Miso Soup", Category::Side, 18_000),
        MenuItem::new("i-4", "Green Tea", Category::Beverage, 15_000).with_availability(false),
        MenuItem::new("i-5", "Mango Pudding", Category::Dessert, 22_000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_menu_is_valid() {
        let catalog = Catalog::new(sample_items()).unwrap();
        assert_eq!(catalog, Catalog::sample());
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![
            MenuItem::new("i-1", "Beef Bulgogi Rice", Category::Main, 85_000),
            MenuItem::new("i-1", "Beef Bulgogi Rice (Large)", Category::Main, 95_000),
        ];
        match Catalog::new(items) {
            Err(CommerceError::DuplicateItemId(id)) => assert_eq!(id, "i-1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_item_rejected() {
        let items = vec![MenuItem::new("i-1", "", Category::Main, 85_000)];
        assert!(Catalog::new(items).is_err());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::sample();
        let item = catalog.get(&ItemId::new("i-3")).unwrap();
        assert_eq!(item.name, "Miso Soup");
        assert!(catalog.get(&ItemId::new("i-99")).is_none());
    }

    #[test]
    fn test_category_counts() {
        let counts = Catalog::sample().category_counts();
        assert_eq!(counts[&Category::Main], 2);
        assert_eq!(counts[&Category::Dessert], 1);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
