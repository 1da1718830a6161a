pub mod user;
pub mod food;
pub mod cart_item;
pub mod order;

pub use user::*;
pub use food::*;
pub use cart_item::*;
pub use order::*;
