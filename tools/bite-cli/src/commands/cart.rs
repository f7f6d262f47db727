//! Cart view: list, remove, change quantities, clear.

use anyhow::Result;
use bite_commerce::cart::{cart_total, LineItem, LinePricing};
use serde::Serialize;

use super::{confirm, line_index, CartArgs, CartCommand};
use crate::context::{Context, Store};
use crate::output::price;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.store()?;

    match args.command.unwrap_or(CartCommand::List) {
        CartCommand::List => {}
        CartCommand::Remove { line } => {
            let removed = store.remove_from_cart(line_index(line)?)?;
            ctx.output
                .success(&format!("Removed {} - {}", removed.name, removed.size));
        }
        CartCommand::Qty { line, quantity } => {
            store.update_quantity(line_index(line)?, quantity)?;
            ctx.output
                .success(&format!("Line {} now has quantity {}", line, quantity));
        }
        CartCommand::Clear { yes } => {
            if store.cart().is_empty() {
                ctx.output.info("The cart is already empty.");
            } else if yes || confirm("Empty the cart?")? {
                store.clear_cart()?;
                ctx.output.success("Cart cleared");
            }
        }
    }

    list(&store, ctx)
}

#[derive(Serialize)]
struct CartLineView<'a> {
    #[serde(flatten)]
    line: &'a LineItem,
    pricing: LinePricing,
}

/// Print every line with its breakdown and the grand total.
pub(crate) fn list(store: &Store, ctx: &Context) -> Result<()> {
    let lines = store
        .cart()
        .iter()
        .enumerate()
        .map(|(index, line)| -> Result<CartLineView<'_>> {
            Ok(CartLineView {
                line,
                pricing: LinePricing::of(index, line)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let total = cart_total(store.cart())?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "lines": lines,
            "total": total,
        }));
        return Ok(());
    }

    ctx.output.header("Cart");
    if lines.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    for view in &lines {
        let line = view.line;
        let addons = if line.addons.is_empty() {
            "-".to_string()
        } else {
            line.addon_names().join(", ")
        };
        println!(
            "\n  {}) {} - {}{}",
            view.pricing.index + 1,
            line.name,
            line.size,
            if line.has_combo() { " + combo" } else { "" }
        );
        ctx.output.kv("Add-ons", &addons);
        ctx.output.kv("Quantity", &line.quantity.to_string());
        ctx.output.kv("Price", &price(view.pricing.total));
    }

    println!();
    ctx.output.kv("Total", &price(total));
    Ok(())
}
