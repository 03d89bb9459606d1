use thiserror::Error;

use crate::domain::ItemId;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Item not in cart: {0}")]
    NotFound(ItemId),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
