//! API error type.

use serde::{Deserialize, Serialize};

/// Classification of an API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// The requested entity does not exist. Deterministic.
    NotFound,
    /// Simulated server or network flakiness. Random.
    Transient,
}

impl ApiErrorKind {
    /// HTTP-style status code for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Transient => 500,
        }
    }
}

/// Error returned by every API operation.
///
/// Carries a human-readable message and a status-code-like classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (status {})", .kind.status_code())]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    /// A 404-class error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::NotFound,
            message: message.into(),
        }
    }

    /// A 500-class error.
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transient,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }

    pub fn is_transient(&self) -> bool {
        self.kind == ApiErrorKind::Transient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::not_found("Product not found").status_code(), 404);
        assert_eq!(ApiError::transient("Failed to fetch products").status_code(), 500);
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("Product not found");
        assert_eq!(err.to_string(), "Product not found (status 404)");
    }
}
