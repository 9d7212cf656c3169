//! Shopping cart module.
//!
//! Contains the cart, its line items, and the session-scoped cart store.

mod cart;
mod store;

pub use cart::{Cart, CartItem};
pub use store::{CartSnapshot, CartStore};
