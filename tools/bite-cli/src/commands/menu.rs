//! Menu view: every item, optionally filtered by category.

use anyhow::Result;
use bite_commerce::catalog::{Catalog, CategoryFilter, Item, SizeKey};
use serde::Serialize;

use super::MenuArgs;
use crate::context::{Context, Store};
use crate::output::{favorite_marker, price};

/// One item as listed in a grid.
#[derive(Serialize)]
pub(crate) struct ItemCard<'a> {
    #[serde(flatten)]
    pub item: &'a Item,
    pub image: &'a str,
    pub favorite: bool,
}

impl<'a> ItemCard<'a> {
    pub fn new(item: &'a Item, store: &Store) -> Self {
        Self {
            item,
            image: item.image_or_placeholder(),
            favorite: store.is_favorite(&item.id),
        }
    }
}

/// Print a grid of items as table rows.
pub(crate) fn print_items(ctx: &Context, cards: &[ItemCard<'_>]) {
    if cards.is_empty() {
        ctx.output.info("Nothing to show here yet.");
        return;
    }

    for card in cards {
        let item = card.item;
        let prices: Vec<String> = item
            .sizes()
            .into_iter()
            .filter_map(|size| item.price.for_size(size).map(|p| (size, p)))
            .map(|(size, p)| match size {
                SizeKey::Single if item.price.double.is_none() => price(p),
                _ => format!("{} {}", size.label(), price(p)),
            })
            .collect();

        let marker = favorite_marker(card.favorite);
        let prices = prices.join(" / ");
        ctx.output.table_row(
            &[marker.as_str(), item.id.as_str(), item.name.as_str(), prices.as_str()],
            &[1, 6, 24, 0],
        );
    }
}

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let store = ctx.store()?;

    let filter = CategoryFilter::parse(&args.category);
    let title = heading(&catalog, &filter);
    let cards: Vec<ItemCard<'_>> = catalog
        .list_by_category(&filter)
        .into_iter()
        .map(|item| ItemCard::new(item, &store))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "category": args.category,
            "categories": catalog.categories(),
            "items": cards,
            "summary": store.summary()?,
        }));
        return Ok(());
    }

    ctx.output.header(&title);
    if !catalog.categories().is_empty() {
        let names: Vec<String> = catalog
            .categories()
            .iter()
            .map(|c| format!("{} ({})", c.title, c.id))
            .collect();
        ctx.output.kv("Categories", &names.join(", "));
    }
    print_items(ctx, &cards);
    ctx.output.cart_bar(&store.summary()?);

    Ok(())
}

/// Title for the listing. Categories without a record show their id.
fn heading(catalog: &Catalog, filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "Menu".to_string(),
        CategoryFilter::Category(id) => catalog
            .find_category(id)
            .map(|c| c.title.clone())
            .unwrap_or_else(|_| id.to_string()),
    }
}
