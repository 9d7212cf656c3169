//! Commerce error types.

use thiserror::Error;

use crate::catalog::{ProductKind, Variation};

/// Errors raised while building catalog records or orders.
///
/// Cart operations never fail; these only surface when loading the dataset
/// or assembling an order.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A product record offers no variations.
    #[error("Product {0} has no variations")]
    NoVariations(String),

    /// A product record offers a variation its category does not allow.
    #[error("Variation {variation} is not valid for {kind} product {product_id}")]
    InvalidVariation {
        product_id: String,
        kind: ProductKind,
        variation: Variation,
    },

    /// A variation label that names no known variation.
    #[error("Unknown variation: {0}")]
    UnknownVariation(String),

    /// A product record has a negative or non-finite price.
    #[error("Invalid price for product {product_id}: {price}")]
    InvalidPrice { product_id: String, price: f64 },

    /// Two dataset records share an identifier.
    #[error("Duplicate product id in dataset: {0}")]
    DuplicateProduct(String),

    /// An order was assembled from an empty cart.
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,

    /// An order line asks for zero units.
    #[error("Order line for {0} has a quantity of 0")]
    EmptyLine(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
