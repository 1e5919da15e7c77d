//! Checkout flow: the 50% due-now payment over the cart.
//!
//! Payment is a stub - a timed wait that always succeeds, standing in for a
//! gateway that does not exist. What the flow does enforce:
//!
//! - no attempt without a logged-in session (callers route to login first)
//! - no attempt over an empty cart
//! - at most one attempt in flight at a time
//!
//! On success the cart is cleared and a [`PaymentConfirmation`] is returned
//! in one step, so callers never observe a cleared cart without its
//! confirmation. Dropping the returned future cancels the attempt and
//! releases the in-flight guard.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Datelike, Utc};
use rand::Rng;
use tracing::{info, instrument};
use uuid::Uuid;

use servex_core::{OrderId, Price};

use crate::config::SimulatedDelays;
use crate::services::{CartStore, SessionStore};

/// Errors that can occur during checkout.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Another payment attempt is still in flight; callers should present
    /// a disabled state rather than an error.
    #[error("a payment is already being processed")]
    PaymentInProgress,

    /// The cart holds no lines; there is nothing to pay for.
    #[error("the cart is empty")]
    EmptyCart,

    /// No identity in the session store; the caller must defer to login
    /// before retrying.
    #[error("sign in before completing payment")]
    NotAuthenticated,

    /// A required card field was left blank.
    #[error("missing card details: {0}")]
    MissingCardDetails(&'static str),
}

/// How the customer wants to pay. Neither variant reaches a gateway.
#[derive(Debug, Clone)]
pub enum PaymentMethod {
    /// Card details straight from the form. Only checked for presence.
    CreditCard {
        name_on_card: String,
        number: String,
        expiry: String,
        cvc: String,
    },
    /// No details collected; the flow jumps straight to processing.
    PayPal,
}

impl PaymentMethod {
    fn validate(&self) -> Result<(), CheckoutError> {
        let Self::CreditCard {
            name_on_card,
            number,
            expiry,
            cvc,
        } = self
        else {
            return Ok(());
        };

        for (field, value) in [
            ("name on card", name_on_card),
            ("card number", number),
            ("expiry date", expiry),
            ("cvc", cvc),
        ] {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingCardDetails(field));
            }
        }
        Ok(())
    }
}

/// Result of a successful payment: the navigation signal to the
/// confirmation view.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    /// Human-facing order reference, e.g. `ORD-2025-4821`.
    pub order_id: OrderId,
    /// Opaque id of the simulated payment transaction.
    pub payment_id: Uuid,
    /// The amount collected now: exactly half the cart total.
    pub amount_paid: Price,
    /// The full cart total; the remainder is due on completion.
    pub total: Price,
}

/// Checkout flow over the session and cart stores.
pub struct CheckoutService {
    session: Arc<SessionStore>,
    cart: Arc<CartStore>,
    delays: SimulatedDelays,
    in_flight: AtomicBool,
}

impl CheckoutService {
    /// Create the flow over its two stores.
    #[must_use]
    pub const fn new(
        session: Arc<SessionStore>,
        cart: Arc<CartStore>,
        delays: SimulatedDelays,
    ) -> Self {
        Self {
            session,
            cart,
            delays,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The amount collected at checkout: exactly half the cart total.
    ///
    /// The remaining 50% is due on project completion.
    #[must_use]
    pub fn due_now(&self) -> Price {
        self.cart.total_price().half()
    }

    /// Whether a payment attempt is currently in flight.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit a payment for the current cart.
    ///
    /// Awaits the simulated processing delay, then clears the cart and
    /// returns the confirmation. Repeated submissions while an attempt is
    /// in flight are rejected immediately with
    /// [`CheckoutError::PaymentInProgress`]; dropping the future releases
    /// the guard.
    ///
    /// # Errors
    ///
    /// See [`CheckoutError`]. No variant is returned after the delay: once
    /// processing starts, the attempt always succeeds.
    #[instrument(skip(self, method))]
    pub async fn submit_payment(
        &self,
        method: &PaymentMethod,
    ) -> Result<PaymentConfirmation, CheckoutError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if !self.session.is_authenticated() {
            return Err(CheckoutError::NotAuthenticated);
        }
        method.validate()?;

        let total = self.cart.total_price();
        let amount_paid = total.half();

        tokio::time::sleep(self.delays.payment).await;

        // Clear-then-confirm happens inside the flow so callers see the two
        // as one step.
        self.cart.clear();

        let confirmation = PaymentConfirmation {
            order_id: new_order_reference(),
            payment_id: Uuid::new_v4(),
            amount_paid,
            total,
        };
        info!(order_id = %confirmation.order_id, amount = %amount_paid, "Payment processed");
        Ok(confirmation)
    }
}

/// Generate a human-facing order reference like `ORD-2025-4821`.
fn new_order_reference() -> OrderId {
    let suffix: u16 = rand::rng().random_range(0..10_000);
    OrderId::new(format!("ORD-{}-{suffix:04}", Utc::now().year()))
}

/// Releases the in-flight flag when the attempt resolves or is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, CheckoutError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| CheckoutError::PaymentInProgress)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::MemoryStore;

    fn card() -> PaymentMethod {
        PaymentMethod::CreditCard {
            name_on_card: "Jane Doe".to_owned(),
            number: "4242 4242 4242 4242".to_owned(),
            expiry: "12/30".to_owned(),
            cvc: "123".to_owned(),
        }
    }

    fn checkout_with_delays(delays: SimulatedDelays) -> (Arc<SessionStore>, Arc<CartStore>, CheckoutService) {
        let storage: crate::storage::SharedStore = Arc::new(MemoryStore::new());
        let session = Arc::new(SessionStore::new(Arc::clone(&storage), delays));
        let cart = Arc::new(CartStore::new(storage));
        let checkout = CheckoutService::new(Arc::clone(&session), Arc::clone(&cart), delays);
        (session, cart, checkout)
    }

    fn fill_cart_to_1000(cart: &CartStore) {
        // No catalog entry costs a round $500, so adjust a snapshot.
        let mut service = Catalog::builtin().all().first().cloned().unwrap();
        service.price = servex_core::Price::from_dollars(500);
        cart.add_item(&service);
        cart.add_item(&service);
    }

    #[tokio::test]
    async fn test_due_now_is_half_the_total() {
        let (_, cart, checkout) = checkout_with_delays(SimulatedDelays::none());
        fill_cart_to_1000(&cart);
        assert_eq!(checkout.due_now(), Price::from_dollars(500));
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let (session, _, checkout) = checkout_with_delays(SimulatedDelays::none());
        session.login("a@b.com", "longenough").await.unwrap();

        let err = checkout.submit_payment(&card()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn test_anonymous_session_defers_to_login() {
        let (_, cart, checkout) = checkout_with_delays(SimulatedDelays::none());
        fill_cart_to_1000(&cart);

        let err = checkout.submit_payment(&card()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::NotAuthenticated));
        // Nothing was cleared by the rejected attempt.
        assert_eq!(cart.total_items(), 2);
    }

    #[tokio::test]
    async fn test_blank_card_field_is_rejected() {
        let (session, cart, checkout) = checkout_with_delays(SimulatedDelays::none());
        session.login("a@b.com", "longenough").await.unwrap();
        fill_cart_to_1000(&cart);

        let method = PaymentMethod::CreditCard {
            name_on_card: String::new(),
            number: "4242".to_owned(),
            expiry: "12/30".to_owned(),
            cvc: "123".to_owned(),
        };
        let err = checkout.submit_payment(&method).await.unwrap_err();
        assert!(matches!(err, CheckoutError::MissingCardDetails("name on card")));
    }

    #[tokio::test]
    async fn test_successful_payment_clears_cart_once() {
        let (session, cart, checkout) = checkout_with_delays(SimulatedDelays::none());
        session.login("a@b.com", "longenough").await.unwrap();
        fill_cart_to_1000(&cart);

        let confirmation = checkout.submit_payment(&card()).await.unwrap();
        assert_eq!(confirmation.total, Price::from_dollars(1000));
        assert_eq!(confirmation.amount_paid, Price::from_dollars(500));
        assert!(confirmation.order_id.as_str().starts_with("ORD-"));
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_paypal_needs_no_details() {
        let (session, cart, checkout) = checkout_with_delays(SimulatedDelays::none());
        session.login("a@b.com", "longenough").await.unwrap();
        fill_cart_to_1000(&cart);

        assert!(checkout.submit_payment(&PaymentMethod::PayPal).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_submission_is_rejected_while_in_flight() {
        let (session, cart, checkout) = checkout_with_delays(SimulatedDelays::standard());
        session.login("a@b.com", "longenough").await.unwrap();
        fill_cart_to_1000(&cart);

        let checkout = Arc::new(checkout);
        let first = {
            let checkout = Arc::clone(&checkout);
            tokio::spawn(async move { checkout.submit_payment(&card()).await })
        };
        // Let the first attempt run up to its simulated delay.
        tokio::task::yield_now().await;
        assert!(checkout.is_processing());

        let err = checkout.submit_payment(&card()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::PaymentInProgress));

        // The first attempt still resolves, and the cart cleared exactly once.
        let confirmation = first.await.unwrap().unwrap();
        assert_eq!(confirmation.amount_paid, Price::from_dollars(500));
        assert!(cart.is_empty());
        assert!(!checkout.is_processing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_attempt_releases_the_guard() {
        let (session, cart, checkout) = checkout_with_delays(SimulatedDelays::standard());
        session.login("a@b.com", "longenough").await.unwrap();
        fill_cart_to_1000(&cart);

        {
            let method = card();
            let attempt = checkout.submit_payment(&method);
            tokio::pin!(attempt);
            // Poll once so the guard is taken, then drop the future.
            assert!(
                futures_poll_once(attempt.as_mut()).await.is_none(),
                "attempt should still be pending"
            );
            assert!(checkout.is_processing());
        }

        assert!(!checkout.is_processing());
        // The cancelled attempt never cleared the cart.
        assert_eq!(cart.total_items(), 2);
    }

    /// Poll a future exactly once; `Some` if it resolved.
    async fn futures_poll_once<F: std::future::Future + Unpin>(fut: F) -> Option<F::Output> {
        use std::task::Poll;

        let mut fut = fut;
        std::future::poll_fn(move |cx| match std::pin::Pin::new(&mut fut).poll(cx) {
            Poll::Ready(out) => Poll::Ready(Some(out)),
            Poll::Pending => Poll::Ready(None),
        })
        .await
    }
}
