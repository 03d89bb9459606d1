use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};
use rust_decimal::Decimal;

use crate::app_system::StorefrontError;
use crate::domain::{CartView, Category, Item, ItemId};
use crate::storefront::Storefront;

// =============================================================================
// 1. THE MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StorefrontError>>;

/// Everything the user can do to a session. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum StorefrontRequest {
    AddItem {
        item: Item,
        respond_to: Response<CartView>,
    },
    RemoveItem {
        id: ItemId,
        respond_to: Response<CartView>,
    },
    UpdateQuantity {
        id: ItemId,
        quantity: i64,
        respond_to: Response<CartView>,
    },
    AdjustQuantity {
        id: ItemId,
        delta: i64,
        respond_to: Response<CartView>,
    },
    Total {
        respond_to: Response<Decimal>,
    },
    CartSnapshot {
        respond_to: Response<CartView>,
    },
    FindItem {
        id: ItemId,
        respond_to: Response<Option<Item>>,
    },
    SelectCategory {
        category: Option<Category>,
        respond_to: Response<Vec<Item>>,
    },
    Search {
        query: String,
        respond_to: Response<Vec<Item>>,
    },
}

// =============================================================================
// 2. THE SESSION ACTOR
// =============================================================================

/// Owns the session and applies requests strictly one at a time, so each
/// operation (and the render it triggers) completes before the next starts.
pub struct StorefrontActor {
    receiver: mpsc::Receiver<StorefrontRequest>,
    storefront: Storefront,
}

impl StorefrontActor {
    pub fn new(buffer_size: usize, storefront: Storefront) -> (Self, StorefrontHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            storefront,
        };
        (actor, StorefrontHandle::new(sender))
    }

    #[instrument(name = "storefront_actor", skip(self))]
    pub async fn run(mut self) {
        info!(catalog_size = self.storefront.catalog().len(), "StorefrontActor starting");
        self.storefront.refresh_catalog();

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StorefrontRequest::AddItem { item, respond_to } => {
                    self.handle_add_item(item, respond_to);
                }
                StorefrontRequest::RemoveItem { id, respond_to } => {
                    self.handle_remove_item(id, respond_to);
                }
                StorefrontRequest::UpdateQuantity { id, quantity, respond_to } => {
                    self.handle_update_quantity(id, quantity, respond_to);
                }
                StorefrontRequest::AdjustQuantity { id, delta, respond_to } => {
                    self.handle_adjust_quantity(id, delta, respond_to);
                }
                StorefrontRequest::Total { respond_to } => {
                    let _ = respond_to.send(Ok(self.storefront.cart().total()));
                }
                StorefrontRequest::CartSnapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.storefront.cart().view()));
                }
                StorefrontRequest::FindItem { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.storefront.find_item(id)));
                }
                StorefrontRequest::SelectCategory { category, respond_to } => {
                    let _ = respond_to.send(Ok(self.storefront.select_category(category)));
                }
                StorefrontRequest::Search { query, respond_to } => {
                    let _ = respond_to.send(Ok(self.storefront.search(query)));
                }
            }
        }

        info!("StorefrontActor stopped");
    }

    #[instrument(fields(item_id = %item.id, item_name = %item.name), skip(self, item, respond_to))]
    fn handle_add_item(&mut self, item: Item, respond_to: Response<CartView>) {
        debug!("Processing add_item request");
        let cart = self.storefront.cart_mut();
        cart.add_item(&item);
        let _ = respond_to.send(Ok(cart.view()));
    }

    #[instrument(fields(item_id = %id), skip(self, respond_to))]
    fn handle_remove_item(&mut self, id: ItemId, respond_to: Response<CartView>) {
        debug!("Processing remove_item request");
        let cart = self.storefront.cart_mut();
        cart.remove_item(id);
        let _ = respond_to.send(Ok(cart.view()));
    }

    #[instrument(fields(item_id = %id, quantity = quantity), skip(self, respond_to))]
    fn handle_update_quantity(&mut self, id: ItemId, quantity: i64, respond_to: Response<CartView>) {
        debug!("Processing update_quantity request");
        let cart = self.storefront.cart_mut();
        let result: Result<CartView, StorefrontError> = match cart.update_quantity(id, quantity) {
            Ok(()) => Ok(cart.view()),
            Err(e) => {
                warn!(error = %e, "Quantity update rejected");
                Err(e.into())
            }
        };
        let _ = respond_to.send(result);
    }

    /// Reads and rewrites the line's quantity in one step, so concurrent
    /// `+`/`-` presses cannot overwrite each other.
    #[instrument(fields(item_id = %id, delta = delta), skip(self, respond_to))]
    fn handle_adjust_quantity(&mut self, id: ItemId, delta: i64, respond_to: Response<CartView>) {
        debug!("Processing adjust_quantity request");
        let cart = self.storefront.cart_mut();
        let result: Result<CartView, StorefrontError> = match cart.adjust_quantity(id, delta) {
            Ok(()) => Ok(cart.view()),
            Err(e) => {
                warn!(error = %e, "Quantity adjustment rejected");
                Err(e.into())
            }
        };
        let _ = respond_to.send(result);
    }
}

// =============================================================================
// 3. THE HANDLE
// =============================================================================

/// Generate handle methods with oneshot channel boilerplate and automatic tracing.
macro_rules! request_method {
    (fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $variant:ident) => {
        impl StorefrontHandle {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, StorefrontError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender
                    .send(StorefrontRequest::$variant { $($param,)* respond_to })
                    .await
                    .map_err(|_| StorefrontError::ActorCommunicationError("Actor closed".to_string()))?;
                response
                    .await
                    .map_err(|_| StorefrontError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Cloneable sender side of a [`StorefrontActor`].
#[derive(Clone)]
pub struct StorefrontHandle {
    sender: mpsc::Sender<StorefrontRequest>,
}

impl StorefrontHandle {
    pub fn new(sender: mpsc::Sender<StorefrontRequest>) -> Self {
        Self { sender }
    }
}

request_method!(fn add_item(item: Item) -> CartView as AddItem);
request_method!(fn remove_item(id: ItemId) -> CartView as RemoveItem);
request_method!(fn update_quantity(id: ItemId, quantity: i64) -> CartView as UpdateQuantity);
request_method!(fn adjust_quantity(id: ItemId, delta: i64) -> CartView as AdjustQuantity);
request_method!(fn total() -> Decimal as Total);
request_method!(fn cart_snapshot() -> CartView as CartSnapshot);
request_method!(fn find_item(id: ItemId) -> Option<Item> as FindItem);
request_method!(fn select_category(category: Option<Category>) -> Vec<Item> as SelectCategory);
request_method!(fn search(query: String) -> Vec<Item> as Search);
