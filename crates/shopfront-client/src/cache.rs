//! Caller-side query cache.
//!
//! Keeps successful catalog reads fresh for a stale time so that screens
//! revisiting the same product do not pay the simulated latency again.
//! Errors are never cached and orders always go through.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::checkout::{OrderConfirmation, OrderRequest};
use shopfront_commerce::ids::ProductId;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::client::StorefrontApi;
use crate::error::ApiError;

/// Default time a cached read stays fresh.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// Root segment shared by every query key.
const ROOT: &str = "shopfront";

/// Hierarchical key identifying a cached query.
///
/// Keys are segment paths such as `shopfront/products/p1`; invalidating a
/// key also drops every key beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    segments: Vec<String>,
}

impl QueryKey {
    /// Key covering every query.
    pub fn all() -> Self {
        Self {
            segments: vec![ROOT.to_string()],
        }
    }

    /// Key of the product list.
    pub fn products() -> Self {
        Self::all().child("products")
    }

    /// Key of one product.
    pub fn product(id: &ProductId) -> Self {
        Self::products().child(id.as_str())
    }

    fn child(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Check whether `self` equals `other` or lies beneath it.
    pub fn starts_with(&self, other: &QueryKey) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[derive(Debug, Clone)]
enum Cached {
    Products(Vec<Product>),
    Product(Product),
}

#[derive(Debug)]
struct Entry {
    value: Cached,
    fetched_at: Instant,
}

/// Wraps any [`StorefrontApi`] and memoizes catalog reads.
pub struct CachedClient<A> {
    inner: A,
    stale_time: Duration,
    entries: RwLock<HashMap<QueryKey, Entry>>,
}

impl<A: StorefrontApi> CachedClient<A> {
    /// Wrap `inner` with the default stale time.
    pub fn new(inner: A) -> Self {
        Self::with_stale_time(inner, DEFAULT_STALE_TIME)
    }

    /// Wrap `inner` with a custom stale time.
    pub fn with_stale_time(inner: A, stale_time: Duration) -> Self {
        Self {
            inner,
            stale_time,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped client.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Drop `key` and every key beneath it.
    pub async fn invalidate(&self, key: &QueryKey) {
        let mut entries = self.entries.write().await;
        entries.retain(|k, _| !k.starts_with(key));
        debug!(%key, "invalidated queries");
    }

    /// Number of cached queries, fresh or stale.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn fresh(&self, key: &QueryKey) -> Option<Cached> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.fetched_at.elapsed() < self.stale_time {
            debug!(%key, "query cache hit");
            Some(entry.value.clone())
        } else {
            None
        }
    }

    async fn store(&self, key: QueryKey, value: Cached) {
        let entry = Entry {
            value,
            fetched_at: Instant::now(),
        };
        self.entries.write().await.insert(key, entry);
    }
}

#[async_trait]
impl<A: StorefrontApi> StorefrontApi for CachedClient<A> {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let key = QueryKey::products();
        if let Some(Cached::Products(products)) = self.fresh(&key).await {
            return Ok(products);
        }

        let products = self.inner.list_products().await?;
        self.store(key, Cached::Products(products.clone())).await;
        Ok(products)
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let key = QueryKey::product(id);
        if let Some(Cached::Product(product)) = self.fresh(&key).await {
            return Ok(product);
        }

        let product = self.inner.fetch_product(id).await?;
        self.store(key, Cached::Product(product.clone())).await;
        Ok(product)
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError> {
        self.inner.submit_order(order).await
    }
}
