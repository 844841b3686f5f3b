//! Cart command.

use anyhow::Result;
use menu_commerce::cart::TAX_LABEL;
use menu_commerce::checkout::OrderSummary;

use super::{apply_actions, CartArgs};
use crate::context::Context;

const WIDTHS: [usize; 4] = [24, 12, 5, 12];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session().await?;
    apply_actions(&mut session, &args.actions)?;

    let summary = session.order_summary();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output
        .header(&format!("Your Cart ({} items)", summary.item_count));
    print_summary(ctx, &summary);
    Ok(())
}

/// Print cart lines and the price breakdown.
pub(crate) fn print_summary(ctx: &Context, summary: &OrderSummary) {
    if summary.is_empty() {
        ctx.output.info("Your cart is empty");
        ctx.output.info("Add some delicious items to get started!");
        return;
    }

    ctx.output.table_row(&["ITEM", "PRICE", "QTY", "TOTAL"], &WIDTHS);
    ctx.output.rule(WIDTHS.iter().sum::<usize>() + 2 * (WIDTHS.len() - 1));
    for line in &summary.lines {
        let price = line.unit_price.display();
        let qty = line.quantity.to_string();
        let total = line.line_total.display();
        ctx.output
            .table_row(&[&line.name, &price, &qty, &total], &WIDTHS);
    }

    ctx.output.blank();
    ctx.output
        .amount("Subtotal", &summary.totals.subtotal.display(), false);
    ctx.output.amount(TAX_LABEL, &summary.totals.tax.display(), false);
    ctx.output
        .amount("Grand Total", &summary.totals.grand_total.display(), true);
}
