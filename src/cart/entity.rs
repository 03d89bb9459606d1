use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::CartError;
use crate::domain::{CartLine, CartView, Item, ItemId};
use crate::render::Renderer;

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 99_999;

/// Ordered cart lines, unique by item id, plus the renderers watching them.
///
/// Every mutating call notifies each subscriber exactly once with a fresh
/// [`CartView`], except `update_quantity` on an absent line (nothing to
/// update) and rejected input.
#[derive(Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    subscribers: Vec<Box<dyn Renderer>>,
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cart")
            .field("lines", &self.lines)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, renderer: Box<dyn Renderer>) {
        self.subscribers.push(renderer);
    }

    /// Adds one of `item`. The first add stores a copy of the item; later
    /// adds only bump the quantity, up to [`MAX_LINE_QUANTITY`].
    pub fn add_item(&mut self, item: &Item) {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) if line.quantity >= MAX_LINE_QUANTITY => {
                warn!(item_id = %item.id, quantity = line.quantity, "Cart line already at maximum quantity");
            }
            Some(line) => {
                line.quantity += 1;
                debug!(item_id = %item.id, quantity = line.quantity, "Incremented cart line");
            }
            None => {
                self.lines.push(CartLine::new(item.clone()));
                info!(item_id = %item.id, item_name = %item.name, "Added new cart line");
            }
        }
        self.notify();
    }

    /// Drops the line for `id`. Absent ids are a no-op, but still re-render.
    pub fn remove_item(&mut self, id: ItemId) {
        self.remove_line(id);
        self.notify();
    }

    /// Sets the quantity of an existing line. Zero removes the line; a
    /// positive quantity for an id not in the cart is ignored.
    pub fn update_quantity(&mut self, id: ItemId, quantity: i64) -> Result<(), CartError> {
        if quantity < 0 {
            warn!(item_id = %id, quantity, "Rejected negative quantity");
            return Err(CartError::InvalidArgument(format!(
                "quantity must not be negative, got {}",
                quantity
            )));
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|quantity| *quantity <= MAX_LINE_QUANTITY)
            .ok_or_else(|| {
                warn!(item_id = %id, quantity, "Rejected oversized quantity");
                CartError::InvalidArgument(format!(
                    "quantity {} exceeds the maximum of {}",
                    quantity, MAX_LINE_QUANTITY
                ))
            })?;

        if quantity == 0 {
            self.remove_item(id);
            return Ok(());
        }

        match self.lines.iter_mut().find(|line| line.item.id == id) {
            Some(line) => {
                line.quantity = quantity;
                debug!(item_id = %id, quantity, "Updated cart line quantity");
                self.notify();
            }
            None => debug!(item_id = %id, "No cart line to update"),
        }
        Ok(())
    }

    /// Moves an existing line's quantity by `delta` in one step. The line
    /// must exist; landing on zero removes it.
    pub fn adjust_quantity(&mut self, id: ItemId, delta: i64) -> Result<(), CartError> {
        let current = self.line(id).ok_or(CartError::NotFound(id))?.quantity;
        let target = i64::from(current).saturating_add(delta);
        self.update_quantity(id, target)
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[allow(dead_code)]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item.id == id)
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn view(&self) -> CartView {
        CartView {
            lines: self.lines.clone(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }

    fn remove_line(&mut self, id: ItemId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.item.id != id);
        if self.lines.len() < before {
            info!(item_id = %id, "Removed cart line");
        } else {
            debug!(item_id = %id, "No cart line to remove");
        }
    }

    fn notify(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let view = self.view();
        for renderer in &mut self.subscribers {
            renderer.render_cart(&view);
        }
    }
}
