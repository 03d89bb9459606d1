use rust_decimal::Decimal;

use super::Item;

/// One entry in the cart: a snapshot of the item taken when it was first
/// added, and how many of it were picked. `quantity` is never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: Item,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: Item) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn subtotal(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// What a renderer receives after every cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub item_count: u64,
    pub total: Decimal,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[allow(dead_code)]
    pub fn quantity_of(&self, id: super::ItemId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.item.id == id)
            .map(|line| line.quantity)
    }
}
