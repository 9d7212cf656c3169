//! Product details.

use anyhow::Result;
use shopfront_client::{retry, StorefrontApi};
use shopfront_commerce::ids::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::kind_badge;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client();
    let id = ProductId::new(args.id);

    let spinner = ctx.output.spinner(&format!("Loading product {}...", id));
    let result = retry(&args.retry.policy(), || client.fetch_product(&id)).await;
    spinner.finish_and_clear();
    let product = result?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(product.name());
    ctx.output.kv("id", product.id().as_str());
    ctx.output.kv("type", &kind_badge(product.kind()));
    ctx.output.kv("price", &product.price().display());
    if !product.image().is_empty() {
        ctx.output.kv("image", product.image());
    }
    if !product.details().is_empty() {
        ctx.output.kv("details", product.details());
    }

    ctx.output.info(product.kind().variation_prompt());
    for variation in product.variations() {
        ctx.output.list_item(variation.label());
    }

    Ok(())
}
