use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument};

use crate::actor_framework::StorefrontHandle;
use crate::app_system::StorefrontError;
use crate::cart::CartError;
use crate::domain::{CartView, Item, ItemId};

/// Cart controls as the page exposes them: add buttons on catalog cards and
/// `+`/`-`/remove buttons on each cart line.
#[derive(Clone)]
pub struct CartClient {
    inner: StorefrontHandle,
}

impl CartClient {
    pub fn new(inner: StorefrontHandle) -> Self {
        Self { inner }
    }

    #[allow(dead_code)]
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_item(&self, item: Item) -> Result<CartView, StorefrontError> {
        debug!("Sending request");
        self.inner.add_item(item).await
    }

    /// Looks the item up in the catalog, then adds it.
    #[instrument(skip(self))]
    pub async fn add_by_id(&self, id: ItemId) -> Result<CartView, StorefrontError> {
        match self.inner.find_item(id).await? {
            Some(item) => {
                info!(item_name = %item.name, "Catalog lookup successful");
                self.inner.add_item(item).await
            }
            None => {
                error!("Item not in catalog");
                Err(CartError::NotFound(id).into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: ItemId) -> Result<CartView, StorefrontError> {
        debug!("Sending request");
        self.inner.remove_item(id).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: ItemId, quantity: i64) -> Result<CartView, StorefrontError> {
        debug!("Sending request");
        self.inner.update_quantity(id, quantity).await
    }

    /// The `+` button on a cart line.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: ItemId) -> Result<CartView, StorefrontError> {
        debug!("Sending request");
        self.inner.adjust_quantity(id, 1).await
    }

    /// The `-` button on a cart line. Going below one removes the line.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: ItemId) -> Result<CartView, StorefrontError> {
        debug!("Sending request");
        self.inner.adjust_quantity(id, -1).await
    }

    pub async fn total(&self) -> Result<Decimal, StorefrontError> {
        self.inner.total().await
    }

    #[allow(dead_code)]
    pub async fn cart(&self) -> Result<CartView, StorefrontError> {
        self.inner.cart_snapshot().await
    }
}
