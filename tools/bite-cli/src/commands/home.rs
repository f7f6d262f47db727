//! Home view: brand, opening hours and featured items.

use anyhow::Result;

use super::menu::{print_items, ItemCard};
use super::HomeArgs;
use crate::context::Context;

/// Run the home command.
pub fn run(_args: HomeArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let store = ctx.store()?;
    let settings = catalog.settings();

    let featured: Vec<ItemCard<'_>> = catalog
        .featured_for_home()
        .into_iter()
        .map(|item| ItemCard::new(item, &store))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "settings": settings,
            "featured": featured,
            "summary": store.summary()?,
        }));
        return Ok(());
    }

    ctx.output.header(&settings.brand);
    if !settings.address.is_empty() {
        ctx.output.kv("Address", &settings.address);
    }
    if !settings.hours.is_empty() {
        ctx.output.kv("Hours", &settings.hours);
    }
    ctx.output.kv("WhatsApp", &settings.whatsapp);

    ctx.output.header("Featured");
    print_items(ctx, &featured);
    ctx.output.cart_bar(&store.summary()?);

    Ok(())
}
