//! Menu listing command.

use anyhow::Result;
use menu_commerce::search::{CategoryFilter, FilterCriteria};
use serde::Serialize;

use super::ListArgs;
use crate::context::Context;
use crate::output::availability_badge;

const WIDTHS: [usize; 5] = [6, 24, 10, 12, 12];

#[derive(Serialize)]
struct ListOutput<'a> {
    criteria: &'a FilterCriteria,
    total: usize,
    summary: String,
    items: &'a [&'a menu_commerce::catalog::MenuItem],
}

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let category: CategoryFilter = args.category.parse()?;
    let mut session = ctx.open_session().await?;
    session.set_criteria(
        FilterCriteria::new()
            .with_search(args.search)
            .with_category(category)
            .available_only(args.available_only),
    );

    let results = session.visible_items();

    if ctx.output.is_json() {
        ctx.output.json(&ListOutput {
            criteria: session.criteria(),
            total: results.total,
            summary: results.summary(),
            items: &results.items,
        });
        return Ok(());
    }

    ctx.output.header("Delicious Menu");
    ctx.output.kv("Category", category.display_name());
    if !session.criteria().search_term.is_empty() {
        ctx.output.kv("Search", &session.criteria().search_term);
    }
    if session.criteria().available_only {
        ctx.output.kv("Showing", "available items only");
    }
    ctx.output.blank();

    if results.is_empty() {
        ctx.output.warn("No items found");
        ctx.output.info("Try adjusting your search or filter criteria");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STATUS"], &WIDTHS);
    ctx.output.rule(WIDTHS.iter().sum::<usize>() + 2 * (WIDTHS.len() - 1));

    for item in &results.items {
        let price = item.price.display();
        let status = availability_badge(item.is_available);
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.name,
                item.category.as_str(),
                &price,
                &status,
            ],
            &WIDTHS,
        );
    }

    ctx.output.blank();
    ctx.output.info(&results.summary());

    Ok(())
}
