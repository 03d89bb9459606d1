use std::io::Write;

use tracing::warn;

use super::{format_cart, format_catalog, Renderer};
use crate::domain::{CartView, Item};

/// Draws the storefront as plain text into any writer.
pub struct TextRenderer<W> {
    out: W,
    currency: String,
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new(out: W, currency: impl Into<String>) -> Self {
        Self {
            out,
            currency: currency.into(),
        }
    }

    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Render write failed");
        }
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn render_catalog(&mut self, items: &[Item]) {
        let text = format_catalog(items, &self.currency);
        self.draw(&text);
    }

    fn render_cart(&mut self, view: &CartView) {
        let text = format_cart(view, &self.currency);
        self.draw(&text);
    }
}
