//! End-to-end storefront flows over a file-backed store.

use bite_cache::{FileStore, KvStore, MemoryStore};
use bite_commerce::cart::{DEFAULT_CART_KEY, DEFAULT_FAVORITES_KEY};
use bite_commerce::order::DEFAULT_MESSAGING_DOMAIN;
use bite_commerce::prelude::*;

const CATALOG: &[(&str, &str)] = &[
    (
        "settings.json",
        r#"{"whatsapp":"201234567890","brand":"Burger Bar","featuredCount":2}"#,
    ),
    (
        "items.json",
        r#"[
            {"id":"1","name":"كلاسيك","desc":"","price":{"single":100,"double":150},"category":"burgers","featured":true},
            {"id":"2","name":"بطاطس","desc":"","price":{"single":50},"category":"sides","featured":true},
            {"id":"3","name":"كولا","desc":"","price":{"single":25},"category":"drinks","featured":true}
        ]"#,
    ),
    ("addons.json", r#"[{"id":"cheese","name":"جبنة","price":10}]"#),
    ("combos.json", r#"[{"id":"c1","name":"كومبو","extra":20}]"#),
    (
        "categories.json",
        r#"[{"id":"burgers","title":"برجر"},{"id":"sides","title":"جانبي"}]"#,
    ),
];

fn load_catalog() -> (tempfile::TempDir, Catalog) {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in CATALOG {
        std::fs::write(dir.path().join(name), body).unwrap();
    }
    let catalog = Catalog::load(&DirSource::new(dir.path())).unwrap();
    (dir, catalog)
}

#[test]
fn empty_cart_has_zero_total_and_hidden_summary() {
    let store = CartStore::open(MemoryStore::new());
    assert_eq!(cart_total(store.cart()).unwrap(), Money::zero());
    assert!(!store.summary().unwrap().visible);
}

#[test]
fn configured_line_prices_addons_and_combo_per_unit() {
    let (_dir, catalog) = load_catalog();
    let selection = Selection::new(SizeKey::Single)
        .with_addon("cheese")
        .with_combo(true)
        .with_quantity(2);

    let line = catalog
        .build_line_item(&ProductId::new("1"), &selection)
        .unwrap();
    assert_eq!(line_total(&line).unwrap(), Money::new(260));
}

#[test]
fn two_lines_sum_to_grand_total() {
    let (_dir, catalog) = load_catalog();
    let mut store = CartStore::open(MemoryStore::new());

    let fries = catalog
        .build_line_item(&ProductId::new("2"), &Selection::default())
        .unwrap();
    let colas = catalog
        .build_line_item(&ProductId::new("3"), &Selection::default().with_quantity(3))
        .unwrap();
    store.add_to_cart(fries).unwrap();
    store.add_to_cart(colas).unwrap();

    assert_eq!(store.summary().unwrap().total, Money::new(125));
}

#[test]
fn cart_round_trips_through_disk() {
    let (_dir, catalog) = load_catalog();
    let storage = tempfile::tempdir().unwrap();

    let expected = {
        let mut store = CartStore::open(FileStore::open(storage.path()).unwrap());
        for (id, size) in [("1", SizeKey::Double), ("2", SizeKey::Single)] {
            let line = catalog
                .build_line_item(
                    &ProductId::new(id),
                    &Selection::new(size).with_addon("cheese"),
                )
                .unwrap();
            store.add_to_cart(line).unwrap();
        }
        store.toggle_favorite(&ProductId::new("3")).unwrap();
        store.cart().to_vec()
    };

    let reopened = CartStore::open(FileStore::open(storage.path()).unwrap());
    assert_eq!(reopened.cart(), expected.as_slice());
    assert!(reopened.is_favorite(&ProductId::new("3")));
}

#[test]
fn malformed_storage_opens_empty() {
    let storage = tempfile::tempdir().unwrap();
    let backend = FileStore::open(storage.path()).unwrap();
    backend.set(DEFAULT_CART_KEY, b"not json at all").unwrap();
    backend.set(DEFAULT_FAVORITES_KEY, b"{}").unwrap();

    let store = CartStore::open(backend);
    assert!(store.cart().is_empty());
    assert!(store.favorites().is_empty());
}

#[test]
fn reads_cart_written_by_the_web_storefront() {
    let backend = MemoryStore::new();
    backend
        .set(
            DEFAULT_CART_KEY,
            r#"[{"id":"1","name":"كلاسيك","size":"دابل","unitPrice":150,"qty":2,
                "addons":[{"id":"cheese","name":"جبنة","price":10}],
                "combo":{"id":"c1","name":"كومبو","extra":20}}]"#
                .as_bytes(),
        )
        .unwrap();

    let store = CartStore::open(backend);
    assert_eq!(store.summary().unwrap().total, Money::new(360));
}

#[test]
fn uncapped_web_storefront_quantity_does_not_block_the_cart() {
    let storage = tempfile::tempdir().unwrap();
    let backend = FileStore::open(storage.path()).unwrap();
    backend
        .set(
            DEFAULT_CART_KEY,
            r#"[{"id":"1","name":"كلاسيك","size":"سينجل","unitPrice":100,"qty":120},
                {"id":"2","name":"بطاطس","size":"سينجل","unitPrice":50,"qty":1}]"#
                .as_bytes(),
        )
        .unwrap();

    let mut store = CartStore::open(backend);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.summary().unwrap().total, Money::new(50));

    store.update_quantity(0, 2).unwrap();
    let reopened = CartStore::open(FileStore::open(storage.path()).unwrap());
    assert_eq!(cart_total(reopened.cart()).unwrap(), Money::new(100));
}

#[test]
fn order_dispatch_then_clear() {
    let (_dir, catalog) = load_catalog();
    let mut store = CartStore::open(MemoryStore::new());
    let line = catalog
        .build_line_item(&ProductId::new("1"), &Selection::default().with_combo(true))
        .unwrap();
    store.add_to_cart(line).unwrap();

    let customer = Customer {
        name: "منى".into(),
        mobile: "01111111111".into(),
        address: "مدينة نصر".into(),
        notes: None,
        payment_method: "كاش".into(),
    };
    let dispatch = OrderDispatch::prepare(
        store.cart(),
        &customer,
        catalog.settings(),
        DEFAULT_MESSAGING_DOMAIN,
    )
    .unwrap();

    assert!(dispatch.target.starts_with("https://wa.me/201234567890?text="));
    assert!(dispatch.message.contains("1) كلاسيك - سينجل + كومبو عدد (1)"));
    assert!(dispatch.message.contains("*المجموع*: ١٢٠ ج"));
    assert_eq!(store.cart().len(), 1);

    store.clear_cart().unwrap();
    assert!(store.cart().is_empty());
}

#[test]
fn home_view_lists_featured_items_up_to_setting() {
    let (_dir, catalog) = load_catalog();
    let featured: Vec<_> = catalog
        .featured_for_home()
        .into_iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(featured, ["1", "2"]);
}

#[test]
fn favorites_view_lists_catalog_items() {
    let (_dir, catalog) = load_catalog();
    let mut store = CartStore::open(MemoryStore::new());
    let mut favorites = Favorites::new(&mut store, &catalog);

    favorites.toggle(&ProductId::new("3")).unwrap();
    favorites.toggle(&ProductId::new("1")).unwrap();
    let names: Vec<_> = favorites
        .list_favorites()
        .into_iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, ["كلاسيك", "كولا"]);
}

#[test]
fn bundled_sample_catalog_loads() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let catalog = Catalog::load(&DirSource::new(root)).unwrap();

    assert_eq!(catalog.featured_for_home().len(), 4);
    assert!(catalog.default_combo().is_ok());
    let preview = catalog
        .price_preview(
            &ProductId::new("2"),
            &Selection::new(SizeKey::Double).with_addon("bacon"),
        )
        .unwrap();
    assert_eq!(preview, Money::new(220));
}
