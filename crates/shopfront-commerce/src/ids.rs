//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes keeps product identifiers and order identifiers from being
//! mixed up at call sites that take plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a catalog product, unique within the dataset.
    ProductId
);
define_id!(
    /// Identifier handed back when an order is accepted.
    OrderId
);

impl OrderId {
    /// Generate a fresh order identifier.
    ///
    /// Formatted as `ORD-<unix millis>-<sequence>`. The sequence comes from a
    /// process-wide counter, so identifiers generated within the same
    /// millisecond (or concurrently) never collide.
    pub fn generate() -> Self {
        static SEQUENCE: AtomicU64 = AtomicU64::new(0);

        let millis = chrono::Utc::now().timestamp_millis();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("ORD-{}-{}", millis, seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("p1");
        assert_eq!(id.as_str(), "p1");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "p2".into();
        assert_eq!(id.as_str(), "p2");
        assert_eq!(format!("{}", id), "p2");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("p3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p3\"");
    }

    #[test]
    fn test_order_id_format() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("ORD-"));
        assert_eq!(id.as_str().split('-').count(), 3);
    }

    #[test]
    fn test_order_ids_unique_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| (0..500).map(|_| OrderId::generate()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate order id");
            }
        }
        assert_eq!(seen.len(), 4000);
    }
}
