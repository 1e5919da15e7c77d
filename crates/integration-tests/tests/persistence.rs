//! Restart-recovery and corruption handling over the file store.

#![allow(clippy::unwrap_used)]

use servex_core::ServiceId;
use servex_integration_tests::TestContext;
use servex_storefront::catalog::Catalog;
use servex_storefront::models::CartItem;
use servex_storefront::storage::{KeyValueStore, slots};

#[tokio::test]
async fn session_and_cart_survive_restart() {
    let ctx = TestContext::new();

    let user = {
        let state = ctx.open();
        let service = state.catalog().get(&ServiceId::new("2")).cloned().unwrap();
        state.cart().add_item(&service);
        state.cart().add_item(&service);
        state
            .session()
            .login("jane@example.com", "longenough")
            .await
            .unwrap()
    };

    // "Restart": a fresh state over the same data directory.
    let state = ctx.open();
    assert_eq!(state.session().current_user(), Some(user));
    assert_eq!(state.cart().total_items(), 2);
    assert!(state.cart().is_in_cart(&ServiceId::new("2")));
}

#[tokio::test]
async fn logout_clears_the_persisted_slot() {
    let ctx = TestContext::new();

    {
        let state = ctx.open();
        state
            .session()
            .login("jane@example.com", "longenough")
            .await
            .unwrap();
        state.session().logout();
    }

    let state = ctx.open();
    assert!(state.session().current_user().is_none());
}

#[test]
fn corrupt_user_slot_recovers_to_anonymous() {
    let ctx = TestContext::new();
    ctx.raw_storage().set(slots::USER, "{definitely-not-json").unwrap();

    let state = ctx.open();
    assert!(state.session().current_user().is_none());

    // A subsequent restart sees a clean slot, not the corrupt blob again.
    let state = ctx.open();
    assert!(state.session().current_user().is_none());
}

#[test]
fn corrupt_cart_slot_recovers_to_empty() {
    let ctx = TestContext::new();
    ctx.raw_storage().set(slots::CART, "[[[").unwrap();

    let state = ctx.open();
    assert!(state.cart().is_empty());
    assert_eq!(state.cart().total_items(), 0);
}

#[test]
fn one_corrupt_slot_does_not_take_down_the_other() {
    let ctx = TestContext::new();
    {
        let service = Catalog::builtin().get(&ServiceId::new("1")).cloned().unwrap();
        let good_cart = serde_json::to_string(&[CartItem::new(service)]).unwrap();

        let storage = ctx.raw_storage();
        storage.set(slots::USER, "garbage").unwrap();
        storage.set(slots::CART, &good_cart).unwrap();
    }

    let state = ctx.open();
    assert!(state.session().current_user().is_none());
    assert_eq!(state.cart().total_items(), 1);
}
