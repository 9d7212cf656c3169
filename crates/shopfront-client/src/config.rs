//! Latency and failure-rate configuration for the simulated client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// Default probability that a list or submit call fails.
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

/// Simulated latency per operation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Latency of `list_products`.
    #[serde(default = "default_list_ms")]
    pub list_ms: u64,
    /// Latency of `fetch_product`.
    #[serde(default = "default_fetch_ms")]
    pub fetch_ms: u64,
    /// Latency of `submit_order`.
    #[serde(default = "default_submit_ms")]
    pub submit_ms: u64,
}

fn default_list_ms() -> u64 {
    Operation::ListProducts.default_latency().as_millis() as u64
}

fn default_fetch_ms() -> u64 {
    Operation::FetchProduct.default_latency().as_millis() as u64
}

fn default_submit_ms() -> u64 {
    Operation::SubmitOrder.default_latency().as_millis() as u64
}

impl LatencyConfig {
    /// Same latency for every operation.
    pub fn uniform(latency: Duration) -> Self {
        let ms = latency.as_millis() as u64;
        Self {
            list_ms: ms,
            fetch_ms: ms,
            submit_ms: ms,
        }
    }

    /// No latency at all.
    pub fn instant() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// Latency for one operation.
    pub fn for_operation(&self, operation: Operation) -> Duration {
        let ms = match operation {
            Operation::ListProducts => self.list_ms,
            Operation::FetchProduct => self.fetch_ms,
            Operation::SubmitOrder => self.submit_ms,
        };
        Duration::from_millis(ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_ms: default_list_ms(),
            fetch_ms: default_fetch_ms(),
            submit_ms: default_submit_ms(),
        }
    }
}

/// Configuration for a [`SimulatedClient`](crate::SimulatedClient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Per-operation latency.
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Probability in `[0, 1]` that a list or submit call fails.
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,

    /// Seed for the failure generator; `None` seeds from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_failure_rate() -> f64 {
    DEFAULT_FAILURE_RATE
}

impl ClientConfig {
    /// Zero latency, default failure rate.
    pub fn instant() -> Self {
        Self {
            latency: LatencyConfig::instant(),
            ..Self::default()
        }
    }

    /// Set the failure rate.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate;
        self
    }

    /// Set the failure generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set per-operation latency.
    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            failure_rate: DEFAULT_FAILURE_RATE,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latencies() {
        let latency = LatencyConfig::default();
        assert_eq!(latency.for_operation(Operation::ListProducts), Duration::from_millis(800));
        assert_eq!(latency.for_operation(Operation::FetchProduct), Duration::from_millis(500));
        assert_eq!(latency.for_operation(Operation::SubmitOrder), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"latency": {"list_ms": 5}, "seed": 7}"#).unwrap();
        assert_eq!(config.latency.list_ms, 5);
        assert_eq!(config.latency.fetch_ms, 500);
        assert_eq!(config.failure_rate, DEFAULT_FAILURE_RATE);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_instant() {
        let config = ClientConfig::instant();
        assert_eq!(config.latency.for_operation(Operation::SubmitOrder), Duration::ZERO);
    }
}
