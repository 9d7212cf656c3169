//! The storefront API and its simulated implementation.

use std::sync::Arc;

use async_trait::async_trait;
use shopfront_commerce::catalog::{Catalog, Product};
use shopfront_commerce::checkout::{OrderConfirmation, OrderRequest};
use shopfront_commerce::ids::{OrderId, ProductId};
use tracing::{debug, info, warn};

use crate::config::{ClientConfig, LatencyConfig};
use crate::error::ApiError;
use crate::failure::{FailureInjector, RandomFailure};
use crate::operation::Operation;

/// Asynchronous catalog and order API.
///
/// Calls are independent: any number may be in flight at once and each
/// resolves on its own. Implementations never retry.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// The full catalog, in dataset order.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// One product by id. Unknown ids fail with a 404-class error.
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError>;

    /// Submit an order and receive a fresh order id.
    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError>;
}

#[async_trait]
impl<A: StorefrontApi + ?Sized> StorefrontApi for Arc<A> {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        (**self).list_products().await
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        (**self).fetch_product(id).await
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError> {
        (**self).submit_order(order).await
    }
}

/// Network-shaped client over the static dataset.
///
/// Every call sleeps for its configured latency. List and submit calls then
/// roll the failure injector and fail with a transient error when it fires.
/// The catalog is shared read-only; the only other state is the injector.
pub struct SimulatedClient<F = Box<dyn FailureInjector>> {
    catalog: Arc<Catalog>,
    latency: LatencyConfig,
    injector: F,
}

impl SimulatedClient {
    /// Build a client from configuration, using a [`RandomFailure`] at the
    /// configured rate (seeded when the config carries a seed).
    pub fn from_config(catalog: Arc<Catalog>, config: &ClientConfig) -> Self {
        let injector: Box<dyn FailureInjector> = match config.seed {
            Some(seed) => Box::new(RandomFailure::seeded(config.failure_rate, seed)),
            None => Box::new(RandomFailure::from_entropy(config.failure_rate)),
        };
        Self::new(catalog, config.latency, injector)
    }
}

impl<F: FailureInjector> SimulatedClient<F> {
    /// Create a client with an explicit failure injector.
    pub fn new(catalog: Arc<Catalog>, latency: LatencyConfig, injector: F) -> Self {
        Self {
            catalog,
            latency,
            injector,
        }
    }

    /// The catalog this client serves.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    async fn simulate(&self, operation: Operation) -> Result<(), ApiError> {
        let latency = self.latency.for_operation(operation);
        debug!(%operation, latency_ms = latency.as_millis() as u64, "simulating request");
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        if let Some(message) = operation.failure_message() {
            if self.injector.should_fail() {
                warn!(%operation, "injected transient failure");
                return Err(ApiError::transient(message));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<F: FailureInjector> StorefrontApi for SimulatedClient<F> {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.simulate(Operation::ListProducts).await?;
        Ok(self.catalog.products().to_vec())
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.simulate(Operation::FetchProduct).await?;
        self.catalog.get(id).cloned().ok_or_else(|| {
            debug!(product_id = %id, "product not found");
            ApiError::not_found("Product not found")
        })
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError> {
        self.simulate(Operation::SubmitOrder).await?;
        let order_id = OrderId::generate();
        info!(
            %order_id,
            lines = order.items().len(),
            units = order.item_count(),
            "order accepted"
        );
        Ok(OrderConfirmation { order_id })
    }
}
