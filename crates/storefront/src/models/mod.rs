//! Domain models for the storefront.

pub mod cart;
pub mod service;
pub mod user;

pub use cart::CartItem;
pub use service::{Service, ServiceCategory};
pub use user::User;
