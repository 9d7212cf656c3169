//! CLI command implementations.

pub mod checkout;
pub mod config;
pub mod product;
pub mod products;

use std::str::FromStr;

use anyhow::{bail, Context as _};
use clap::{Args, Subcommand};
use shopfront_client::{BackoffStrategy, RetryPolicy};
use shopfront_commerce::catalog::Variation;
use shopfront_commerce::ids::ProductId;

/// Retry behavior shared by the read commands.
#[derive(Args, Clone, Copy)]
pub struct RetryArgs {
    /// Retry transient failures this many times.
    #[arg(short, long, default_value = "0")]
    pub retries: u32,

    /// Delay between retries in milliseconds.
    #[arg(long, default_value = "250")]
    pub retry_delay_ms: u64,
}

impl RetryArgs {
    /// Policy for these arguments.
    pub fn policy(&self) -> RetryPolicy {
        if self.retries == 0 {
            return RetryPolicy::none();
        }
        RetryPolicy::new(self.retries).with_backoff(BackoffStrategy::Fixed(
            std::time::Duration::from_millis(self.retry_delay_ms),
        ))
    }
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub retry: RetryArgs,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id, e.g. `p3`.
    pub id: String,

    #[command(flatten)]
    pub retry: RetryArgs,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to order as `<id>:<variation>[:<quantity>]`, e.g. `p1:small:2`.
    #[arg(short, long = "item", required = true)]
    pub items: Vec<ItemSpec>,

    /// Customer name.
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Shipping address.
    #[arg(long)]
    pub address: Option<String>,

    /// Credit card number.
    #[arg(long)]
    pub card: Option<String>,

    /// Skip prompts and the confirmation.
    #[arg(short, long)]
    pub yes: bool,

    #[command(flatten)]
    pub retry: RetryArgs,
}

/// One `--item` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product_id: ProductId,
    pub variation: Variation,
    pub quantity: u32,
}

impl FromStr for ItemSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':').map(str::trim);

        let id = parts.next().filter(|id| !id.is_empty());
        let variation = parts.next();
        let (Some(id), Some(variation)) = (id, variation) else {
            bail!("expected <id>:<variation>[:<quantity>], got '{}'", s);
        };

        let variation = variation.parse::<Variation>()?;

        let quantity = match parts.next() {
            Some(qty) => qty
                .parse::<u32>()
                .with_context(|| format!("invalid quantity '{}'", qty))?,
            None => 1,
        };
        if quantity == 0 {
            bail!("quantity must be at least 1");
        }
        if parts.next().is_some() {
            bail!("too many ':' separators in '{}'", s);
        }

        Ok(Self {
            product_id: ProductId::new(id),
            variation,
            quantity,
        })
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_spec_defaults_to_one() {
        let spec: ItemSpec = "p1:small".parse().unwrap();
        assert_eq!(spec.product_id, ProductId::new("p1"));
        assert_eq!(spec.variation, Variation::Small);
        assert_eq!(spec.quantity, 1);
    }

    #[test]
    fn test_item_spec_with_quantity() {
        let spec: ItemSpec = "p2:pre-owned:3".parse().unwrap();
        assert_eq!(spec.variation, Variation::PreOwned);
        assert_eq!(spec.quantity, 3);
    }

    #[test]
    fn test_item_spec_rejects_bad_input() {
        assert!("p1".parse::<ItemSpec>().is_err());
        assert!(":small".parse::<ItemSpec>().is_err());
        assert!("p1:huge".parse::<ItemSpec>().is_err());
        assert!("p1:small:0".parse::<ItemSpec>().is_err());
        assert!("p1:small:x".parse::<ItemSpec>().is_err());
        assert!("p1:small:1:2".parse::<ItemSpec>().is_err());
    }

    #[test]
    fn test_retry_policy_from_args() {
        let none = RetryArgs { retries: 0, retry_delay_ms: 250 };
        assert_eq!(none.policy(), RetryPolicy::none());

        let some = RetryArgs { retries: 2, retry_delay_ms: 10 };
        assert_eq!(some.policy().max_attempts, 2);
    }
}
