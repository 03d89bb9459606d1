use tracing::{error, info};

use super::{StorefrontConfig, StorefrontError};
use crate::actor_framework::StorefrontActor;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::clients::{CartClient, CatalogClient};
use crate::render::{Renderer, TextRenderer};
use crate::storefront::Storefront;

/// A running storefront session.
///
/// Responsible for wiring the cart to its renderer, starting the session
/// actor, and handling shutdown.
pub struct StorefrontSystem {
    pub cart_client: CartClient,
    pub catalog_client: CatalogClient,
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Must be called from within a tokio runtime.
    pub fn start(
        config: &StorefrontConfig,
        catalog: Catalog,
        catalog_renderer: Box<dyn Renderer>,
        cart_renderer: Box<dyn Renderer>,
    ) -> Self {
        info!(buffer_size = config.buffer_size, "Starting storefront system");

        let mut cart = Cart::new();
        cart.subscribe(cart_renderer);
        let storefront = Storefront::new(catalog, cart, catalog_renderer);

        let (actor, storefront_handle) = StorefrontActor::new(config.buffer_size, storefront);
        let handle = tokio::spawn(actor.run());

        Self {
            cart_client: CartClient::new(storefront_handle.clone()),
            catalog_client: CatalogClient::new(storefront_handle),
            handle,
        }
    }

    /// Starts a session that draws both the catalog and the cart to stdout.
    pub fn with_stdout(config: &StorefrontConfig, catalog: Catalog) -> Self {
        let catalog_renderer = TextRenderer::new(std::io::stdout(), config.currency.clone());
        let cart_renderer = TextRenderer::new(std::io::stdout(), config.currency.clone());
        Self::start(config, catalog, Box::new(catalog_renderer), Box::new(cart_renderer))
    }

    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");

        // The actor stops once every handle is gone.
        drop(self.cart_client);
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!("Storefront actor failed: {:?}", e);
            return Err(StorefrontError::ActorCommunicationError(format!(
                "Storefront actor failed: {}",
                e
            )));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
