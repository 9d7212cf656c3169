//! Simulated catalog and order API.
//!
//! Gives a storefront UI a network-shaped, asynchronous interface over the
//! static product dataset, so loading and error states can be exercised
//! without a backend.
//!
//! This crate provides:
//! - `StorefrontApi` - The async list/fetch/submit interface
//! - `SimulatedClient` - Implementation with artificial latency and failure injection
//! - `FailureInjector` - Seedable source of simulated server failures
//! - `ClientConfig` - Per-operation latency and failure rate
//! - `RetryPolicy` - Caller-side retry for transient failures
//! - `CachedClient` - Caller-side query cache with a stale time

mod cache;
mod client;
mod config;
mod error;
mod failure;
mod operation;
mod retry;

pub use cache::*;
pub use client::*;
pub use config::*;
pub use error::*;
pub use failure::*;
pub use operation::*;
pub use retry::*;
