//! Product view: configure size, add-ons, combo and quantity, then add.

use anyhow::{Context as _, Result};
use bite_commerce::catalog::Catalog;
use bite_commerce::configurator::Selection;
use bite_commerce::ids::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{favorite_marker, price};

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut store = ctx.store()?;

    let id = ProductId::new(args.id.as_str());
    let selection = selection_from(&args);
    let item = catalog
        .find_item(&id)
        .with_context(|| format!("'{}' is not on the menu", id))?;
    let preview = catalog.price_preview(&id, &selection)?;

    if args.add {
        let line = catalog.build_line_item(&id, &selection)?;
        store.add_to_cart(line)?;
        tracing::info!(
            product = %id,
            quantity = selection.quantity,
            "added from product view"
        );
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "item": item,
            "image": item.image_or_placeholder(),
            "favorite": store.is_favorite(&id),
            "sizes": item.sizes(),
            "addons": catalog.addons(),
            "combo": catalog.default_combo().ok(),
            "preview": preview,
            "added": args.add,
            "summary": store.summary()?,
        }));
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} {}",
        item.name,
        favorite_marker(store.is_favorite(&id))
    ));
    if !item.description.is_empty() {
        ctx.output.info(&item.description);
    }
    ctx.output.kv("Image", item.image_or_placeholder());
    for size in item.sizes() {
        if let Some(p) = item.price.for_size(size) {
            let marker = if size == selection.size { "*" } else { " " };
            ctx.output.kv(
                &format!("{} {}", marker, size.as_str()),
                &format!("{} {}", size.label(), price(p)),
            );
        }
    }
    print_options(ctx, &catalog);

    ctx.output.kv("Price", &price(preview));
    if args.add {
        ctx.output.success(&format!(
            "Added {} x{} to the cart",
            item.name, selection.quantity
        ));
    }
    ctx.output.cart_bar(&store.summary()?);

    Ok(())
}

fn selection_from(args: &ProductArgs) -> Selection {
    args.addons.iter().fold(
        Selection::new(args.size)
            .with_combo(args.combo)
            .with_quantity(args.qty),
        |selection, addon| selection.with_addon(addon.as_str()),
    )
}

fn print_options(ctx: &Context, catalog: &Catalog) {
    if !catalog.addons().is_empty() {
        ctx.output.info("Add-ons (--addon <id>):");
        for addon in catalog.addons() {
            ctx.output.list_item(&format!(
                "{} {} +{}",
                addon.id,
                addon.name,
                price(addon.price)
            ));
        }
    }
    if let Ok(combo) = catalog.default_combo() {
        ctx.output.info(&format!(
            "Combo (--combo): {} +{}",
            combo.name,
            price(combo.extra)
        ));
    }
}
