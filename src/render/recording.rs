use std::sync::{Arc, Mutex};

use super::Renderer;
use crate::domain::{CartView, Item};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Catalog(Vec<Item>),
    Cart(CartView),
}

/// Captures every render call. Clones share the same event log.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn cart_renders(&self) -> Vec<CartView> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Cart(view) => Some(view),
                RenderEvent::Catalog(_) => None,
            })
            .collect()
    }

    pub fn catalog_renders(&self) -> Vec<Vec<Item>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Catalog(items) => Some(items),
                RenderEvent::Cart(_) => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render_catalog(&mut self, items: &[Item]) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::Catalog(items.to_vec()));
    }

    fn render_cart(&mut self, view: &CartView) {
        self.events.lock().unwrap().push(RenderEvent::Cart(view.clone()));
    }
}
