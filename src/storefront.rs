//! One browsing session: the catalog on display, the current filter, and
//! the cart. Everything here is synchronous; the session actor serializes
//! access to it.

use tracing::{debug, info};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::domain::{Category, Item, ItemId};
use crate::render::Renderer;

pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    category: Option<Category>,
    query: String,
    renderer: Box<dyn Renderer>,
}

impl Storefront {
    pub fn new(catalog: Catalog, cart: Cart, renderer: Box<dyn Renderer>) -> Self {
        Self {
            catalog,
            cart,
            category: None,
            query: String::new(),
            renderer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[allow(dead_code)]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn find_item(&self, id: ItemId) -> Option<Item> {
        self.catalog.get(id).cloned()
    }

    /// Switches the category filter, keeping the search text.
    pub fn select_category(&mut self, category: Option<Category>) -> Vec<Item> {
        info!(category = ?category, "Category selected");
        self.category = category;
        self.refresh_catalog()
    }

    /// Switches the search text, keeping the category filter.
    pub fn search(&mut self, query: impl Into<String>) -> Vec<Item> {
        self.query = query.into();
        debug!(query = %self.query, "Search updated");
        self.refresh_catalog()
    }

    /// Re-runs the current filter and hands the result to the renderer.
    pub fn refresh_catalog(&mut self) -> Vec<Item> {
        let items = self.catalog.filter(self.category, &self.query);
        debug!(visible = items.len(), "Rendering catalog");
        self.renderer.render_catalog(&items);
        items
    }
}
