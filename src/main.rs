mod actor_framework;
mod app_system;
mod cart;
mod catalog;
mod clients;
mod domain;
mod render;
mod storefront;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, StorefrontConfig, StorefrontSystem};
use crate::catalog::Catalog;
use crate::domain::ItemId;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!("Starting candy storefront");

    let catalog = Catalog::sample().map_err(|e| e.to_string())?;
    let system = StorefrontSystem::with_stdout(&config, catalog);

    let span = tracing::info_span!("browsing");
    async {
        info!("Filtering catalog");
        system.catalog_client.select_category_tag("chocolate").await?;
        system.catalog_client.search("truffle").await?;
        system.catalog_client.select_category_tag("all").await?;
        system.catalog_client.search("").await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("shopping");
    let shopping = async {
        let cart = &system.cart_client;
        cart.add_by_id(ItemId(1)).await?;
        cart.add_by_id(ItemId(1)).await?;
        cart.add_by_id(ItemId(6)).await?;
        cart.increment(ItemId(6)).await?;
        cart.decrement(ItemId(6)).await?;
        cart.update_quantity(ItemId(1), 5).await?;
        cart.remove_item(ItemId(6)).await?;
        cart.total().await
    }
    .instrument(span)
    .await;

    match shopping {
        Ok(total) => info!(total = %total, "Shopping session finished"),
        Err(e) => error!(error = %e, "Shopping session failed"),
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Storefront closed");
    Ok(())
}
