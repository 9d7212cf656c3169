//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shopfront_client::{CachedClient, SimulatedClient};
use shopfront_commerce::catalog::Catalog;
use tracing::debug;

use crate::config::{ShopfrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Client used by every command: simulated API behind the query cache.
pub type Client = CachedClient<SimulatedClient>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopfrontConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    catalog: Arc<Catalog>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (ShopfrontConfig::load(&path)?, Some(path))
        } else {
            match Self::find_config(&cwd) {
                Some(path) => (ShopfrontConfig::load(&path)?, Some(path)),
                None => (ShopfrontConfig::default(), None),
            }
        };
        config.validate()?;

        let catalog = Catalog::bundled().context("Failed to load bundled catalog")?;

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog: Arc::new(catalog),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
        })
    }

    /// Build a client from the loaded configuration.
    pub fn client(&self) -> Client {
        debug!(
            failure_rate = self.config.client.failure_rate,
            seeded = self.config.client.seed.is_some(),
            "building simulated client"
        );
        CachedClient::new(SimulatedClient::from_config(
            self.catalog.clone(),
            &self.config.client,
        ))
    }
}
