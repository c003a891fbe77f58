//! Cart store behavior: merge semantics, totals, hydration, persistence.

mod common;

use std::fs;

use common::typed_product;
use storefront_sdk::{CartStore, HydrationState};

// ---------------------------------------------------------------------------
// Line-item semantics
// ---------------------------------------------------------------------------

#[test]
fn add_item_twice_merges_into_one_line_item() {
    let mut cart = CartStore::in_memory();
    let widget = typed_product(1, "Widget", 10.0);

    cart.add_item(&widget);
    cart.add_item(&widget);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);
}

#[test]
fn total_items_sums_quantities_not_line_items() {
    let mut cart = CartStore::in_memory();
    let widget = typed_product(1, "Widget", 10.0);
    let gadget = typed_product(2, "Gadget", 25.0);

    for _ in 0..3 {
        cart.add_item(&widget);
    }
    cart.add_item(&gadget);
    cart.update_quantity(2, 2);

    // One item at quantity 3 plus one at quantity 2 is 5 items, not 2.
    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.items().len(), 2);
}

#[test]
fn total_price_uses_stored_prices() {
    let mut cart = CartStore::in_memory();
    cart.add_item(&typed_product(1, "Widget", 10.0));
    cart.add_item(&typed_product(2, "Gadget", 25.5));
    cart.update_quantity(1, 3);

    assert!((cart.total_price() - (10.0 * 3.0 + 25.5)).abs() < 1e-9);
}

#[test]
fn update_quantity_zero_removes_the_line_item() {
    let mut cart = CartStore::in_memory();
    cart.add_item(&typed_product(1, "Widget", 10.0));
    cart.add_item(&typed_product(2, "Gadget", 25.0));

    cart.update_quantity(1, 0);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].product.id, 2);
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn update_quantity_on_unknown_id_is_a_noop() {
    let mut cart = CartStore::in_memory();
    cart.add_item(&typed_product(1, "Widget", 10.0));

    cart.update_quantity(99, 4);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 1);
}

#[test]
fn remove_item_is_a_noop_when_absent() {
    let mut cart = CartStore::in_memory();
    cart.remove_item(42);
    assert!(cart.items().is_empty());
}

#[test]
fn clear_empties_all_line_items() {
    let mut cart = CartStore::in_memory();
    cart.add_item(&typed_product(1, "Widget", 10.0));
    cart.add_item(&typed_product(2, "Gadget", 25.0));

    cart.clear();

    assert!(cart.items().is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), 0.0);
}

// ---------------------------------------------------------------------------
// Hydration
// ---------------------------------------------------------------------------

#[test]
fn persisted_cart_starts_uninitialized_and_becomes_ready_once() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cart = CartStore::open(tmp.path().join("cart.json"));

    assert_eq!(cart.hydration(), HydrationState::Uninitialized);
    assert!(!cart.is_ready());

    cart.restore();
    assert_eq!(cart.hydration(), HydrationState::Ready);

    // Restoring again must not re-read storage or reset contents.
    cart.add_item(&typed_product(1, "Widget", 10.0));
    cart.restore();
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn in_memory_cart_is_ready_immediately() {
    let cart = CartStore::in_memory();
    assert!(cart.is_ready());
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn mutations_round_trip_through_storage() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("cart.json");

    let mut cart = CartStore::open(&path);
    cart.restore();
    cart.add_item(&typed_product(1, "Widget", 10.0));
    cart.add_item(&typed_product(1, "Widget", 10.0));
    cart.add_item(&typed_product(2, "Gadget", 25.0));
    cart.remove_item(2);
    drop(cart);

    let mut reopened = CartStore::open(&path);
    reopened.restore();
    assert_eq!(reopened.items().len(), 1);
    assert_eq!(reopened.items()[0].product.id, 1);
    assert_eq!(reopened.items()[0].quantity, 2);
    assert_eq!(reopened.items()[0].product.title, "Widget");
}

#[test]
fn missing_cart_file_restores_as_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cart = CartStore::open(tmp.path().join("never-written.json"));
    cart.restore();
    assert!(cart.is_ready());
    assert!(cart.items().is_empty());
}

#[test]
fn corrupt_cart_file_is_discarded_and_restores_as_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("cart.json");
    fs::write(&path, "{{{ not json").unwrap();

    let mut cart = CartStore::open(&path);
    cart.restore();

    assert!(cart.is_ready());
    assert!(cart.items().is_empty());
    // The broken file is removed so the next persist starts clean.
    assert!(!path.exists());
}

#[test]
fn restore_drops_non_positive_quantities() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("cart.json");

    let mut item = common::product_json(1, "Widget", 10.0, 4.0, "laptops");
    item["quantity"] = serde_json::json!(0);
    fs::write(&path, serde_json::to_string(&vec![item]).unwrap()).unwrap();

    let mut cart = CartStore::open(&path);
    cart.restore();
    assert!(cart.items().is_empty());
}

#[test]
fn clear_persists_the_empty_table() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("cart.json");

    let mut cart = CartStore::open(&path);
    cart.restore();
    cart.add_item(&typed_product(1, "Widget", 10.0));
    cart.clear();
    drop(cart);

    let mut reopened = CartStore::open(&path);
    reopened.restore();
    assert!(reopened.items().is_empty());
}
