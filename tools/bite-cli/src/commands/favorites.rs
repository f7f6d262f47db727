//! Favorites view.

use anyhow::{Context as _, Result};
use bite_commerce::favorites::Favorites;
use bite_commerce::ids::ProductId;

use super::menu::{print_items, ItemCard};
use super::{FavoritesArgs, FavoritesCommand};
use crate::context::Context;

/// Run the favorites command.
pub fn run(args: FavoritesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut store = ctx.store()?;

    if let Some(FavoritesCommand::Toggle { id }) = args.command {
        let id = ProductId::new(id);
        let item = catalog
            .find_item(&id)
            .with_context(|| format!("'{}' is not on the menu", id))?;
        let now_favorite = Favorites::new(&mut store, &catalog).toggle(&id)?;
        if now_favorite {
            ctx.output.success(&format!("Added {} to favorites", item.name));
        } else {
            ctx.output
                .success(&format!("Removed {} from favorites", item.name));
        }
    }

    let items = Favorites::new(&mut store, &catalog).list_favorites();
    let skipped = store.favorites().len().saturating_sub(items.len());

    let cards: Vec<ItemCard<'_>> = items
        .into_iter()
        .map(|item| ItemCard::new(item, &store))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": cards,
            "summary": store.summary()?,
        }));
        return Ok(());
    }

    ctx.output.header("Favorites");
    print_items(ctx, &cards);
    if skipped > 0 {
        ctx.output
            .warn(&format!("{} favorite(s) are no longer on the menu", skipped));
    }
    ctx.output.cart_bar(&store.summary()?);

    Ok(())
}
