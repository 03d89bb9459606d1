//! The shopping cart: per-session selections and their quantities.

pub mod entity;
pub mod error;

pub use entity::Cart;
pub use error::*;
