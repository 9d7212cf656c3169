//! Cart building and order submission.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Password};
use shopfront_client::{retry, StorefrontApi};
use shopfront_commerce::cart::{CartSnapshot, CartStore};
use shopfront_commerce::catalog::Product;
use shopfront_commerce::checkout::{CheckoutForm, OrderRequest};
use tracing::info;

use super::{CheckoutArgs, ItemSpec};
use crate::context::{Client, Context};

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client();
    let store = CartStore::new();

    ctx.output.header("Building cart");
    for spec in &args.items {
        add_item(spec, &client, &store, &args, ctx).await?;
    }

    let snapshot = store.snapshot();
    print_summary(&snapshot, ctx);

    let interactive = !args.yes && !ctx.output.is_json() && console::user_attended();
    let form = collect_form(&args, interactive)?;
    let customer = match form.validate() {
        Ok(customer) => customer,
        Err(errors) => {
            for error in &errors {
                ctx.output.error(&error.to_string());
            }
            bail!("Checkout form has {} error(s)", errors.len());
        }
    };

    if interactive {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", snapshot.total.display()))
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Order cancelled; nothing was submitted.");
            return Ok(());
        }
    }

    let order = OrderRequest::from_cart(&snapshot.items, customer)?;

    let spinner = ctx.output.spinner("Placing order...");
    let result = client.submit_order(&order).await;
    spinner.finish_and_clear();

    let confirmation = match result {
        Ok(confirmation) => confirmation,
        Err(e) => {
            ctx.output.warn("Your cart was kept; run the command again to retry.");
            return Err(e.into());
        }
    };
    store.clear_cart();
    info!(order_id = %confirmation.order_id, "checkout complete");

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "orderId": confirmation.order_id,
            "total": snapshot.total.display(),
            "itemCount": snapshot.item_count,
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Order placed: {}", confirmation.order_id));
    ctx.output.kv("charged to", &order.customer().masked_card());
    Ok(())
}

async fn add_item(
    spec: &ItemSpec,
    client: &Client,
    store: &CartStore,
    args: &CheckoutArgs,
    ctx: &Context,
) -> Result<()> {
    let spinner = ctx.output.spinner(&format!("Fetching {}...", spec.product_id));
    let result = retry(&args.retry.policy(), || client.fetch_product(&spec.product_id)).await;
    spinner.finish_and_clear();
    let product = result?;

    add_to_store(&product, spec, store)?;
    ctx.output.debug(&format!(
        "added {} x {} ({})",
        spec.quantity,
        product.name(),
        spec.variation
    ));
    Ok(())
}

/// Add `spec.quantity` units of `product`, rejecting variations it does not offer.
fn add_to_store(product: &Product, spec: &ItemSpec, store: &CartStore) -> Result<()> {
    if !product.accepts(spec.variation) {
        let valid: Vec<&str> = product.variations().iter().map(|v| v.label()).collect();
        bail!(
            "{} is not available as {} (choose from: {})",
            product.name(),
            spec.variation,
            valid.join(", ")
        );
    }

    let existing = store
        .items()
        .iter()
        .find(|i| i.matches(product.id(), spec.variation))
        .map_or(0, |i| i.quantity);
    store.add_to_cart(product, spec.variation);
    store.update_quantity(
        product.id(),
        spec.variation,
        i64::from(existing) + i64::from(spec.quantity),
    );
    Ok(())
}

fn print_summary(snapshot: &CartSnapshot, ctx: &Context) {
    if ctx.output.is_json() {
        return;
    }

    ctx.output.header("Order summary");
    let widths = [30, 12, 5, 10];
    ctx.output.table_row(&["ITEM", "OPTION", "QTY", "TOTAL"], &widths);
    for item in &snapshot.items {
        ctx.output.table_row(
            &[
                item.product.name(),
                item.variation.label(),
                &item.quantity.to_string(),
                &item.line_total().display(),
            ],
            &widths,
        );
    }
    ctx.output.kv("items", &snapshot.item_count.to_string());
    ctx.output.kv("total", &snapshot.total.display());
}

/// Fill the form from flags, prompting for anything missing when interactive.
fn collect_form(args: &CheckoutArgs, interactive: bool) -> Result<CheckoutForm> {
    let field = |value: &Option<String>, prompt: &str| -> Result<String> {
        match value {
            Some(value) => Ok(value.clone()),
            None if interactive => Ok(Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?),
            None => Ok(String::new()),
        }
    };

    let name = field(&args.name, "Full name")?;
    let phone = field(&args.phone, "Phone number")?;
    let shipping_address = field(&args.address, "Shipping address")?;
    let credit_card = match &args.card {
        Some(card) => card.clone(),
        None if interactive => Password::new()
            .with_prompt("Credit card number")
            .allow_empty_password(true)
            .interact()?,
        None => String::new(),
    };

    Ok(CheckoutForm {
        name,
        phone,
        shipping_address,
        credit_card,
    })
}
