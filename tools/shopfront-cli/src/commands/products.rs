//! Catalog listing.

use anyhow::Result;
use shopfront_client::{retry, StorefrontApi};

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client();
    let policy = args.retry.policy();

    let spinner = ctx.output.spinner("Loading products...");
    let result = retry(&policy, || client.list_products()).await;
    spinner.finish_and_clear();
    let products = result?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));

    let widths = [5, 30, 15, 10];
    ctx.output.table_row(&["ID", "NAME", "TYPE", "PRICE"], &widths);
    for product in &products {
        ctx.output.table_row(
            &[
                product.id().as_str(),
                product.name(),
                product.kind().as_str(),
                &product.price().display(),
            ],
            &widths,
        );
    }

    Ok(())
}
