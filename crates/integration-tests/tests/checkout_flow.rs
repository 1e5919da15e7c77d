//! End-to-end browse → cart → login → pay flows.

#![allow(clippy::unwrap_used)]

use servex_core::{Price, ServiceId};
use servex_integration_tests::TestContext;
use servex_storefront::models::ServiceCategory;
use servex_storefront::services::{CheckoutError, PaymentMethod};

fn card() -> PaymentMethod {
    PaymentMethod::CreditCard {
        name_on_card: "Jane Doe".to_owned(),
        number: "4242 4242 4242 4242".to_owned(),
        expiry: "12/30".to_owned(),
        cvc: "123".to_owned(),
    }
}

#[tokio::test]
async fn full_purchase_flow() {
    let ctx = TestContext::new();
    let state = ctx.open();

    // Browse: pick the basic website service out of the web category.
    let web = state.catalog().by_category(ServiceCategory::Web);
    let service = web
        .iter()
        .find(|s| s.title == "Basic Website Development")
        .unwrap();
    assert_eq!(service.price, Price::from_dollars(999));

    // Cart: one of those plus a basic scraper ($999 each, $1998 total).
    state.cart().add_item(service);
    let scraper = state.catalog().get(&ServiceId::new("10")).cloned().unwrap();
    state.cart().add_item(&scraper);
    assert_eq!(state.cart().total_price(), Price::from_dollars(1998));
    assert_eq!(state.checkout().due_now(), Price::from_dollars(999));

    // Checkout without a session defers to login.
    let err = state.checkout().submit_payment(&card()).await.unwrap_err();
    assert!(matches!(err, CheckoutError::NotAuthenticated));

    // Log in, then pay.
    state
        .session()
        .login("jane@example.com", "longenough")
        .await
        .unwrap();
    let confirmation = state.checkout().submit_payment(&card()).await.unwrap();

    assert_eq!(confirmation.total, Price::from_dollars(1998));
    assert_eq!(confirmation.amount_paid, Price::from_dollars(999));
    assert!(state.cart().is_empty());

    // The session survives the purchase; the cart does not.
    assert!(state.session().is_authenticated());
    assert_eq!(state.cart().total_price(), Price::ZERO);
}

#[tokio::test]
async fn due_now_for_a_1000_dollar_cart_is_exactly_500() {
    let ctx = TestContext::new();
    let state = ctx.open();

    // No single catalog entry is $1000, so build it from a snapshot with an
    // adjusted price, the way a future catalog revision might.
    let mut service = state.catalog().all().first().cloned().unwrap();
    service.price = Price::from_dollars(1000);
    state.cart().add_item(&service);

    assert_eq!(state.checkout().due_now(), Price::from_dollars(500));
}

#[tokio::test]
async fn paying_an_empty_cart_is_rejected() {
    let ctx = TestContext::new();
    let state = ctx.open();
    state
        .session()
        .login("jane@example.com", "longenough")
        .await
        .unwrap();

    let err = state.checkout().submit_payment(&card()).await.unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));
}
