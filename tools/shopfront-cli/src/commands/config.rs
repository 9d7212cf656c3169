//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ShopfrontConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let client = &ctx.config.client;
    ctx.output.info("[client]");
    ctx.output.kv("failure_rate", &client.failure_rate.to_string());
    ctx.output.kv(
        "seed",
        &client
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string()),
    );

    ctx.output.info("[client.latency]");
    ctx.output.kv("list_ms", &client.latency.list_ms.to_string());
    ctx.output.kv("fetch_ms", &client.latency.fetch_ms.to_string());
    ctx.output.kv("submit_ms", &client.latency.submit_ms.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_filter());
    ctx.output.kv("format", ctx.config.logging.format.as_str());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        ctx.output.warn("No config file found; using defaults.");
        return Ok(());
    };

    // Re-read so the check reflects the file on disk.
    let config = ShopfrontConfig::load(path)?;
    config.validate()?;

    if config.client.latency.list_ms == 0 && config.client.latency.submit_ms == 0 {
        ctx.output.warn("Latency is disabled; loading states will not be visible.");
    }

    ctx.output.success(&format!("{} is valid", path.display()));
    Ok(())
}
