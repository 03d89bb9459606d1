//! Read-only view over the items on sale, with category and text filtering.

pub mod error;
mod sample;

pub use error::*;
pub use sample::sample_items;

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::domain::{Category, Item, ItemId};

/// The fixed, ordered list of items supplied at session start.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids, negative prices and
    /// ratings outside `[0, 5]`.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateItem(item.id));
            }
            if item.price < Decimal::ZERO {
                return Err(CatalogError::InvalidItem(format!(
                    "item {} has negative price {}",
                    item.id, item.price
                )));
            }
            if !(0.0..=5.0).contains(&item.rating) {
                return Err(CatalogError::InvalidItem(format!(
                    "item {} has rating {} outside 0..=5",
                    item.id, item.rating
                )));
            }
        }
        Ok(Self { items })
    }

    /// The candy shop's starting assortment, checked like any other catalog.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::new(sample_items())
    }

    #[allow(dead_code)]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in `category` (or any category when `None`) whose name or
    /// description contains `query`, ignoring case. Source order is kept.
    pub fn filter(&self, category: Option<Category>, query: &str) -> Vec<Item> {
        filter_by_query(&filter_by_category(&self.items, category), query)
    }
}

fn matches_category(item: &Item, category: Option<Category>) -> bool {
    category.map_or(true, |category| item.category == category)
}

/// `query` must already be lower-cased.
fn matches_query(item: &Item, query: &str) -> bool {
    query.is_empty()
        || item.name.to_lowercase().contains(query)
        || item.description.to_lowercase().contains(query)
}

pub fn filter_by_category(items: &[Item], category: Option<Category>) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches_category(item, category))
        .cloned()
        .collect()
}

pub fn filter_by_query(items: &[Item], query: &str) -> Vec<Item> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(item, &query))
        .cloned()
        .collect()
}
