//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod dashboard;
