pub mod item;
pub mod cart_line;

pub use item::*;
pub use cart_line::*;
