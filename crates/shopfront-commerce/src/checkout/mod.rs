//! Checkout module.
//!
//! Contains order requests and confirmations, and checkout form validation.

mod order;
mod validation;

pub use order::{CustomerInfo, OrderConfirmation, OrderLine, OrderRequest};
pub use validation::{CheckoutField, CheckoutForm, FieldError};
