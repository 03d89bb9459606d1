//! Rendering seam. The storefront core only decides *what* to show; a
//! [`Renderer`] decides how it is drawn.

mod text;
#[cfg(test)]
pub mod recording;

pub use text::TextRenderer;

use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{CartView, Item};

pub const DEFAULT_CURRENCY: &str = "₹";

/// Receives state to display. Called synchronously on the session thread.
pub trait Renderer: Send {
    fn render_catalog(&mut self, items: &[Item]);
    fn render_cart(&mut self, view: &CartView);
}

pub fn format_price(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", currency, rounded)
}

pub fn format_catalog(items: &[Item], currency: &str) -> String {
    if items.is_empty() {
        return "No items match the current filters\n".to_string();
    }

    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "[{}] {}  ⭐ {}", item.id, item.name, item.rating);
        let _ = writeln!(out, "    {}", item.description);
        let _ = writeln!(out, "    {}", format_price(item.price, currency));
    }
    out
}

pub fn format_cart(view: &CartView, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cart ({})", view.item_count);
    if view.is_empty() {
        let _ = writeln!(out, "Your cart is empty");
    }
    for line in &view.lines {
        let _ = writeln!(
            out,
            "  {} x{} @ {} = {}",
            line.item.name,
            line.quantity,
            format_price(line.item.price, currency),
            format_price(line.subtotal(), currency),
        );
    }
    let _ = writeln!(out, "Total: {}", format_price(view.total, currency));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartLine, Category};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_price_pads_two_decimals() {
        assert_eq!(format_price(dec!(120.99), "₹"), "₹120.99");
        assert_eq!(format_price(dec!(5), "$"), "$5.00");
        assert_eq!(format_price(Decimal::ZERO, "₹"), "₹0.00");
    }

    #[test]
    fn test_format_price_rounds_half_away_from_zero() {
        assert_eq!(format_price(dec!(0.125), "₹"), "₹0.13");
        assert_eq!(format_price(dec!(2.345), "₹"), "₹2.35");
        assert_eq!(format_price(dec!(2.344), "₹"), "₹2.34");
    }

    #[test]
    fn test_empty_cart_message() {
        let view = CartView {
            lines: vec![],
            item_count: 0,
            total: Decimal::ZERO,
        };
        assert_eq!(
            format_cart(&view, "₹"),
            "Cart (0)\nYour cart is empty\nTotal: ₹0.00\n"
        );
    }

    #[test]
    fn test_cart_lines_show_subtotals() {
        let item = Item::new(1, "Chocolate Truffles", "dark", dec!(120.99), Category::Chocolate);
        let view = CartView {
            lines: vec![CartLine { item, quantity: 2 }],
            item_count: 2,
            total: dec!(241.98),
        };
        assert_eq!(
            format_cart(&view, "₹"),
            "Cart (2)\n  Chocolate Truffles x2 @ ₹120.99 = ₹241.98\nTotal: ₹241.98\n"
        );
    }

    #[test]
    fn test_catalog_cards() {
        let item = Item::new(3, "Artisan Lollipops", "Handcrafted", dec!(30.99), Category::Lollipops)
            .with_rating(4.7);
        assert_eq!(
            format_catalog(&[item], "₹"),
            "[3] Artisan Lollipops  ⭐ 4.7\n    Handcrafted\n    ₹30.99\n"
        );
        assert_eq!(format_catalog(&[], "₹"), "No items match the current filters\n");
    }
}
