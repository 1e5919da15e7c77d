//! Storefront services: the stores and the checkout flow.

pub mod auth;
pub mod cart;
pub mod checkout;

pub use auth::{AuthError, SessionStore};
pub use cart::CartStore;
pub use checkout::{CheckoutError, CheckoutService, PaymentConfirmation, PaymentMethod};
