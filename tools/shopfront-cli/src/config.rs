//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_client::ClientConfig;
use shopfront_observability::LoggingConfig;

/// Names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopfrontConfig {
    /// Simulated client settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopfrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Reject values the client cannot use.
    pub fn validate(&self) -> Result<()> {
        let rate = self.client.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            bail!("client.failure_rate must be between 0 and 1, got {}", rate);
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default shopfront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Shopfront configuration

[client]
# Probability that listing products or submitting an order fails.
failure_rate = 0.1
# Fix the failure sequence for reproducible runs.
# seed = 42

[client.latency]
list_ms = 800
fetch_ms = 500
submit_ms = 1000

[logging]
# trace | debug | info | warn | error (RUST_LOG takes precedence)
level = "warn"
# human | json
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_client::LatencyConfig;
    use shopfront_observability::{LogFormat, LogLevel};

    #[test]
    fn test_default_template_matches_defaults() {
        let parsed: ShopfrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, ShopfrontConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: ShopfrontConfig = toml::from_str(
            r#"
[client]
seed = 7

[client.latency]
list_ms = 0

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(parsed.client.seed, Some(7));
        assert_eq!(parsed.client.failure_rate, 0.1);
        assert_eq!(parsed.client.latency.list_ms, 0);
        assert_eq!(parsed.client.latency.fetch_ms, LatencyConfig::default().fetch_ms);
        assert_eq!(parsed.logging.level, LogLevel::Debug);
        assert_eq!(parsed.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_failure_rate() {
        let mut config = ShopfrontConfig::default();
        assert!(config.validate().is_ok());

        config.client.failure_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_detection() {
        assert!(is_json(Path::new("shopfront.json")));
        assert!(!is_json(Path::new("shopfront.toml")));
        assert!(!is_json(Path::new(".shopfront.toml")));
    }
}
