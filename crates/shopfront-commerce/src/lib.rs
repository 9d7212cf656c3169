//! Catalog, cart and checkout domain types for the Shopfront demo storefront.
//!
//! This crate provides the in-memory core a storefront UI calls into:
//!
//! - **Catalog**: Products, categories and their variations, the bundled dataset
//! - **Cart**: Line items merged by (product, variation), and a session-scoped store
//! - **Checkout**: Order requests, confirmations, and checkout form validation
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let tee = catalog.get(&ProductId::new("p1")).unwrap().clone();
//!
//! let store = CartStore::new();
//! store.add_to_cart(&tee, Variation::Small);
//! store.add_to_cart(&tee, Variation::Small);
//!
//! assert_eq!(store.item_count(), 2);
//! assert_eq!(store.total_amount().display(), "$39.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductKind, Variation};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartSnapshot, CartStore};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, CustomerInfo, FieldError, OrderConfirmation, OrderLine, OrderRequest,
    };
}
