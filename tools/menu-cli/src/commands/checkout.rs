//! Checkout command.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use menu_commerce::checkout::{CustomerInfo, PaymentMethod};
use menu_commerce::CommerceError;

use super::cart::print_summary;
use super::{apply_actions, CheckoutArgs};
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let payment: PaymentMethod = args.payment.parse()?;
    let mut customer = CustomerInfo::new(args.name, args.email, args.phone, args.address);
    if let Some(notes) = args.notes {
        customer = customer.with_notes(notes);
    }

    let mut session = ctx.open_session().await?;
    apply_actions(&mut session, &args.actions)?;

    let summary = session.order_summary();
    if summary.is_empty() {
        bail!(CommerceError::EmptyCart);
    }

    let missing = customer.missing_fields();
    if !missing.is_empty() {
        for field in &missing {
            ctx.output.warn(&format!("--{} is required", field));
        }
        bail!(CommerceError::CheckoutIncomplete(missing));
    }

    if !ctx.output.is_json() {
        ctx.output.header("Checkout Summary");
        print_summary(ctx, &summary);

        ctx.output.header("Customer Information");
        ctx.output.kv("Name", &customer.name);
        ctx.output.kv("Email", &customer.email);
        ctx.output.kv("Phone", &customer.phone);
        ctx.output.kv("Address", &customer.address);
        if let Some(notes) = &customer.notes {
            ctx.output.kv("Notes", notes);
        }
        ctx.output.kv("Payment", payment.display_name());
        ctx.output.blank();
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Place Order - {}?",
                summary.totals.grand_total.display()
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing Order...");
    let result = session.checkout(customer, payment).await;
    spinner.finish_and_clear();
    let order = result?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success(order.status.display_name());
    ctx.output.kv("Order", order.id.as_str());
    ctx.output.kv("Charged", &order.grand_total().display());
    ctx.output
        .info("Thank you for your order. You will receive a confirmation email shortly.");

    Ok(())
}
