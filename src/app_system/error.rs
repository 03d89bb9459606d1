use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;

/// Errors surfaced to callers of a running storefront.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
