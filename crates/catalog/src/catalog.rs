use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paperdesk_core::{DomainError, DomainResult};

use crate::item::Item;

/// Read-only item catalog, keyed by exact item name.
///
/// Exact-string matching is a known fragility of this design; the recommended
/// mitigation is a normalization/alias table maintained by the catalog
/// collaborator, not fuzzy logic inside the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: BTreeMap<String, Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a collection of items, rejecting duplicate names.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> DomainResult<Self> {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Add an entry. Duplicate names are a caller error, never a silent
    /// overwrite.
    pub fn insert(&mut self, item: Item) -> DomainResult<()> {
        if self.items.contains_key(item.name()) {
            return Err(DomainError::invalid_argument(format!(
                "duplicate catalog item: '{}'",
                item.name()
            )));
        }
        self.items.insert(item.name().to_string(), item);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Unit price for an item, failing with [`DomainError::ItemNotFound`] for
    /// names absent from the catalog.
    pub fn base_price(&self, name: &str) -> DomainResult<Decimal> {
        self.get(name)
            .map(Item::unit_price)
            .ok_or_else(|| DomainError::item_not_found(name))
    }

    /// Case-insensitive substring search over item names.
    pub fn search(&self, keyword: &str) -> Vec<&Item> {
        let needle = keyword.to_lowercase();
        self.items
            .values()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Iterate all entries in name order (deterministic).
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
