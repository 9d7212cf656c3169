//! The operations the simulated API exposes.

use std::fmt;
use std::time::Duration;

/// An API operation.
///
/// Each operation carries its default simulated latency and, for operations
/// subject to random failure injection, the message of an injected failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List the full catalog.
    ListProducts,
    /// Fetch one product by id.
    FetchProduct,
    /// Submit an order.
    SubmitOrder,
}

impl Operation {
    /// Default simulated latency for this operation.
    pub fn default_latency(&self) -> Duration {
        match self {
            Self::ListProducts => Duration::from_millis(800),
            Self::FetchProduct => Duration::from_millis(500),
            Self::SubmitOrder => Duration::from_millis(1000),
        }
    }

    /// Whether this operation is subject to random failure.
    ///
    /// Single-product fetches only fail deterministically (unknown id).
    pub fn injects_failures(&self) -> bool {
        self.failure_message().is_some()
    }

    /// Message carried by an injected failure, if this operation can fail at random.
    pub fn failure_message(&self) -> Option<&'static str> {
        match self {
            Self::ListProducts => Some("Failed to fetch products"),
            Self::FetchProduct => None,
            Self::SubmitOrder => Some("Order submission failed"),
        }
    }

    /// Get the name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListProducts => "list_products",
            Self::FetchProduct => "fetch_product",
            Self::SubmitOrder => "submit_order",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
