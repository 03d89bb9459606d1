use thiserror::Error;

use crate::domain::ItemId;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}
